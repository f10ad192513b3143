//! Templates for tasks, time entries, and invoices.

use practice::TaskPriority;

/// (title, priority)
pub const TASKS: &[(&str, TaskPriority)] = &[
    ("File motion for extension", TaskPriority::Urgent),
    ("Prepare discovery responses", TaskPriority::High),
    ("Schedule client meeting", TaskPriority::Normal),
    ("Review opposing counsel's production", TaskPriority::High),
    ("Draft engagement letter", TaskPriority::Normal),
    ("Update conflict database", TaskPriority::Low),
    ("Calendar hearing dates", TaskPriority::High),
    ("Send monthly status report", TaskPriority::Normal),
    ("Research limitation period", TaskPriority::High),
    ("Prepare witness outline", TaskPriority::Normal),
    ("Order hearing transcript", TaskPriority::Low),
    ("Reconcile trust account", TaskPriority::Normal),
    ("Collect signed retainer", TaskPriority::Urgent),
    ("Draft settlement agreement", TaskPriority::High),
    ("Archive closed matter files", TaskPriority::Low),
    ("Follow up on unpaid invoices", TaskPriority::Normal),
    ("Prepare exhibit binders", TaskPriority::Normal),
    ("Review expert report", TaskPriority::High),
];

pub const TIME_ENTRY_DESCRIPTIONS: &[&str] = &[
    "Telephone conference with client",
    "Drafted motion to compel",
    "Reviewed document production",
    "Legal research on limitation defence",
    "Prepared for deposition",
    "Attended deposition",
    "Revised settlement agreement",
    "Correspondence with opposing counsel",
    "Court appearance at status conference",
    "Reviewed and summarised expert report",
    "Drafted discovery requests",
    "Internal strategy meeting",
    "Prepared trial exhibits",
    "Reviewed court order and updated calendar",
    "Drafted client status memo",
];

/// Invoice memos; the invoice number is derived from the memo's position.
pub const INVOICE_MEMOS: &[&str] = &[
    "Initial retainer",
    "Professional services - January",
    "Professional services - February",
    "Professional services - March",
    "Professional services - April",
    "Professional services - May",
    "Professional services - June",
    "Deposition costs and fees",
    "Expert witness disbursements",
    "Court filing fees",
    "Mediation fees",
    "Trial preparation",
    "Final invoice on matter closing",
    "Advisory services - quarterly",
];
