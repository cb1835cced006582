//! Static toolkit content: downloadable resources, process steps, FAQ.

use serde::Serialize;

/// Grouping shown on the resource cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceCategory {
    Templates,
    Guides,
}

impl ResourceCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Templates => "Templates",
            Self::Guides => "Guides",
        }
    }
}

/// One downloadable template or guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateResource {
    pub title: &'static str,
    pub description: &'static str,
    pub format: &'static str,
    pub link: &'static str,
    pub category: ResourceCategory,
}

pub const TEMPLATES: &[TemplateResource] = &[
    TemplateResource {
        title: "Basic FOIA Request Letter",
        description: "Standard template for requesting public records",
        format: "PDF",
        link: "/downloads/foia-basic-template.pdf",
        category: ResourceCategory::Templates,
    },
    TemplateResource {
        title: "Budget Records Request",
        description: "Specialized form for requesting budget and financial documents",
        format: "DOCX",
        link: "/downloads/budget-records-request.docx",
        category: ResourceCategory::Templates,
    },
    TemplateResource {
        title: "Meeting Minutes Request",
        description: "Template for requesting government meeting records and minutes",
        format: "PDF",
        link: "/downloads/meeting-minutes-request.pdf",
        category: ResourceCategory::Templates,
    },
    TemplateResource {
        title: "Contract Information Request",
        description: "Form for requesting government contract and vendor information",
        format: "DOCX",
        link: "/downloads/contract-info-request.docx",
        category: ResourceCategory::Templates,
    },
    TemplateResource {
        title: "FOIA Appeals Guide",
        description: "Step-by-step guide for appealing denied FOIA requests",
        format: "PDF",
        link: "/downloads/foia-appeals-guide.pdf",
        category: ResourceCategory::Guides,
    },
    TemplateResource {
        title: "Virginia FOIA Law Summary",
        description: "Complete overview of Virginia Freedom of Information Act",
        format: "PDF",
        link: "/downloads/va-foia-law-summary.pdf",
        category: ResourceCategory::Guides,
    },
];

/// The request process, in order.
pub const PROCESS_STEPS: &[&str] = &[
    "Identify the records you need",
    "Choose the appropriate agency",
    "Submit your request",
    "Wait for response (5 business days)",
    "Review provided records",
];

/// One FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What is the Virginia Freedom of Information Act?",
        answer: "The Virginia Freedom of Information Act (FOIA) ensures that the people of \
                 Virginia have access to public records held by government agencies. It promotes \
                 transparency and accountability in government operations.",
    },
    Faq {
        question: "How long does it take to get a response?",
        answer: "Government agencies must respond to FOIA requests within 5 business days. They \
                 can either provide the records, deny the request with explanation, or request \
                 additional time if the request is complex.",
    },
    Faq {
        question: "Are there any fees for FOIA requests?",
        answer: "Agencies may charge reasonable fees for searching, reviewing, and copying \
                 records. The first hour of staff time is typically free, and copying costs are \
                 usually minimal (around $0.10 per page).",
    },
    Faq {
        question: "What if my request is denied?",
        answer: "If your request is denied, you have the right to appeal. The agency must provide \
                 specific legal reasons for denial. You can appeal to the agency head or file a \
                 petition in circuit court.",
    },
    Faq {
        question: "What records are exempt from FOIA?",
        answer: "Certain records are exempt, including personnel records, ongoing criminal \
                 investigations, attorney-client privileged communications, and records that \
                 would compromise security or privacy.",
    },
];
