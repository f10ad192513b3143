//! Templates for cases and everything hanging off a case.

pub struct CaseTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CASES: &[CaseTemplate] = &[
    CaseTemplate {
        title: "Harlow v. Dunmore Logistics",
        description: "Breach of a multi-year freight supply agreement after early termination.",
    },
    CaseTemplate {
        title: "State v. Everett Quill",
        description: "Defense against charges of aggravated assault following a bar altercation.",
    },
    CaseTemplate {
        title: "In re Marriage of Solberg",
        description: "Contested dissolution with disputed custody of two minor children.",
    },
    CaseTemplate {
        title: "Brightwater Series A Financing",
        description: "Negotiation and closing of a preferred stock financing round.",
    },
    CaseTemplate {
        title: "Nakamura v. Crestline Hospitality",
        description: "Wrongful termination and unpaid overtime claims by a former manager.",
    },
    CaseTemplate {
        title: "Pinecrest Commons Lease Dispute",
        description: "Landlord claim for unpaid rent and damages to a retail unit.",
    },
    CaseTemplate {
        title: "Verdant Labs Trademark Opposition",
        description: "Opposition to a confusingly similar mark filed by a competitor.",
    },
    CaseTemplate {
        title: "Adeyemi Family Visa Petition",
        description: "Family-based immigrant petitions for a spouse and two dependants.",
    },
    CaseTemplate {
        title: "Castellano v. Metro Transit Authority",
        description: "Personal injury claim after a bus collision at a signalled crossing.",
    },
    CaseTemplate {
        title: "Estate of Margaret Ellery",
        description: "Probate of a contested will with assets in two jurisdictions.",
    },
    CaseTemplate {
        title: "Orchard Point Tax Audit",
        description: "Representation in a state sales tax audit covering three fiscal years.",
    },
    CaseTemplate {
        title: "In re Halvorsen Manufacturing",
        description: "Chapter 11 reorganization and negotiations with secured creditors.",
    },
    CaseTemplate {
        title: "Greer v. Summit Ridge HOA",
        description: "Challenge to an architectural review decision and associated fines.",
    },
    CaseTemplate {
        title: "Lumen Analytics Acquisition",
        description: "Asset purchase of a data analytics start-up including IP assignment.",
    },
    CaseTemplate {
        title: "Delacroix Patent Infringement",
        description: "Assertion of a sensor patent against an overseas manufacturer.",
    },
    CaseTemplate {
        title: "State v. Rowan Achterberg",
        description: "Defense of a first-offence DUI charge with a disputed breath test.",
    },
    CaseTemplate {
        title: "Whitcombe Custody Modification",
        description: "Petition to modify parenting time after a parent's relocation.",
    },
    CaseTemplate {
        title: "Kestrel Freight Employee Classification",
        description: "Collective action alleging misclassification of drivers as contractors.",
    },
    CaseTemplate {
        title: "Marchetti Construction Lien",
        description: "Enforcement of a mechanic's lien for unpaid subcontractor work.",
    },
    CaseTemplate {
        title: "Ibarra v. Northgate Medical Group",
        description: "Medical negligence claim arising from a delayed diagnosis.",
    },
];

/// (title, body)
pub const CASE_NOTES: &[(&str, &str)] = &[
    ("Initial consultation", "Client outlined the timeline of events and key documents to collect."),
    ("Conflict check cleared", "No conflicts found against opposing parties or related entities."),
    ("Strategy session", "Agreed to pursue early mediation while preparing for discovery."),
    ("Call with opposing counsel", "Opposing counsel open to a standstill pending document exchange."),
    ("Witness list draft", "Identified four potential witnesses; two require subpoenas."),
    ("Damages estimate", "Preliminary damages range prepared with the client's accountant."),
    ("Client follow-up", "Client provided missing correspondence and bank statements."),
    ("Expert retained", "Engaged an independent expert; report expected in six weeks."),
    ("Settlement authority", "Client authorised settlement within the discussed range."),
    ("Court clerk call", "Clerk confirmed filing requirements for the upcoming motion."),
    ("Research summary", "Controlling authority in this circuit favours our reading of the clause."),
    ("Budget review", "Fees to date within estimate; flagged likely overrun if trial proceeds."),
    ("Deposition debrief", "Witness testimony consistent with prior statements; no surprises."),
    ("Risk assessment", "Main exposure is the limitation defence; prepare tolling argument."),
    ("File closing checklist", "Outstanding items: final invoice, return of original documents."),
];

pub struct DocumentTemplate {
    pub name: &'static str,
    pub file_name: &'static str,
    /// Preferred document type name, when the tenant has it.
    pub type_hint: &'static str,
}

pub const CASE_DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate { name: "Complaint", file_name: "complaint.pdf", type_hint: "Pleading" },
    DocumentTemplate { name: "Answer and Counterclaim", file_name: "answer.pdf", type_hint: "Pleading" },
    DocumentTemplate { name: "Motion to Dismiss", file_name: "motion_to_dismiss.pdf", type_hint: "Motion" },
    DocumentTemplate { name: "Motion to Compel Discovery", file_name: "motion_to_compel.pdf", type_hint: "Motion" },
    DocumentTemplate { name: "Master Services Agreement", file_name: "msa.pdf", type_hint: "Contract" },
    DocumentTemplate { name: "Demand Letter", file_name: "demand_letter.docx", type_hint: "Correspondence" },
    DocumentTemplate { name: "Client Email Thread", file_name: "client_emails.eml", type_hint: "Correspondence" },
    DocumentTemplate { name: "Exhibit A - Photographs", file_name: "exhibit_a.zip", type_hint: "Evidence" },
    DocumentTemplate { name: "Exhibit B - Invoices", file_name: "exhibit_b.pdf", type_hint: "Evidence" },
    DocumentTemplate { name: "Witness Affidavit", file_name: "affidavit.pdf", type_hint: "Affidavit" },
    DocumentTemplate { name: "Scheduling Order", file_name: "scheduling_order.pdf", type_hint: "Court Order" },
    DocumentTemplate { name: "Engagement Letter", file_name: "engagement_letter.pdf", type_hint: "Engagement Letter" },
    DocumentTemplate { name: "Research Memo", file_name: "research_memo.docx", type_hint: "Memo" },
    DocumentTemplate { name: "Settlement Proposal", file_name: "settlement_proposal.docx", type_hint: "Correspondence" },
];

/// (title, description, days after the case opened)
pub const TIMELINE_EVENTS: &[(&str, &str, i64)] = &[
    ("Matter opened", "Engagement signed and file opened.", 0),
    ("Conflict check completed", "Conflict search returned no matches.", 1),
    ("Demand letter sent", "Formal demand served on the opposing party.", 14),
    ("Complaint filed", "Complaint filed and summons issued.", 30),
    ("Service completed", "Defendant served personally.", 38),
    ("Answer received", "Opposing party filed its answer.", 60),
    ("Initial disclosures exchanged", "Both sides served initial disclosures.", 90),
    ("Mediation scheduled", "Mediator appointed and date agreed.", 120),
    ("Depositions completed", "All party depositions taken.", 180),
    ("Expert reports served", "Expert reports exchanged per scheduling order.", 210),
    ("Pre-trial conference", "Court held pre-trial conference.", 260),
    ("Settlement reached", "Parties executed a settlement term sheet.", 300),
];

/// (title, court)
pub const HEARINGS: &[(&str, &str)] = &[
    ("Case management conference", "County Superior Court, Dept. 12"),
    ("Motion to dismiss hearing", "County Superior Court, Dept. 4"),
    ("Discovery dispute conference", "U.S. District Court, Courtroom 7B"),
    ("Preliminary hearing", "Municipal Court, Room 301"),
    ("Arraignment", "Municipal Court, Room 118"),
    ("Temporary custody hearing", "Family Court, Courtroom 3"),
    ("Settlement conference", "County Superior Court, Dept. 9"),
    ("Summary judgment hearing", "U.S. District Court, Courtroom 11A"),
    ("Status conference", "County Superior Court, Dept. 12"),
    ("Sentencing hearing", "Municipal Court, Room 301"),
    ("Creditors' meeting", "U.S. Bankruptcy Court, Room 2"),
    ("Probate hearing", "Probate Court, Courtroom 5"),
];

pub const JUDGES: &[&str] = &[
    "Hon. Patricia Okonkwo",
    "Hon. Daniel Reyes",
    "Hon. Margaret Lindholm",
    "Hon. Samuel Achebe",
    "Hon. Eleanor Fitzgerald",
    "Hon. Victor Nakashima",
];

pub const HEARING_OUTCOMES: &[&str] = &[
    "Motion granted",
    "Motion denied",
    "Taken under submission",
    "Continued by stipulation",
    "Parties ordered to mediation",
    "Trial date set",
];
