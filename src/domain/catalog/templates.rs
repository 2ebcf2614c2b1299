//! Built-in document type templates.
//!
//! Adding a document type means adding one `const` record here and listing it
//! in [`DOCUMENT_TYPES`].

use super::definition::{DocumentTypeDefinition, Section, Subsection};

/// All built-in document types, in display order.
pub static DOCUMENT_TYPES: &[DocumentTypeDefinition] = &[
    SRS,
    SPRINT_REPORT,
    ARCHITECTURE_DOC,
    USER_MANUAL,
    API_DOCUMENTATION,
    TEST_PLAN,
    PROJECT_CHARTER,
    DESIGN_DOCUMENT,
    TECHNICAL_SPEC,
];

const SRS: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "SRS",
    name: "Software Requirements Specification (SRS)",
    description: "IEEE 830-1998 compliant requirements specification with detailed sections",
    category: "Requirements",
    icon: "FileText",
    sections: &[
        Section {
            number: "1",
            title: "Introduction",
            description: Some("10,000-foot view of the overall project including purpose, scope, and intended audience"),
            subsections: &[
                Subsection::required("1.1", "Purpose")
                    .described("Describe the purpose of the product and intended audience")
                    .fixed(),
                Subsection::required("1.2", "Product Scope")
                    .described("Benefits, objectives, and goals intended for the product. Relate to overall business goals"),
                Subsection::required("1.3", "Product Value")
                    .described("Why the product is important and how it will help the intended audience"),
                Subsection::required("1.4", "Intended Audience")
                    .described("Describe the ideal audience and their characteristics"),
                Subsection::required("1.5", "Intended Use")
                    .described("How the audience will use the product, including use cases"),
                Subsection::required("1.6", "Definitions, Acronyms, and Abbreviations")
                    .described("Industry-specific terms, acronyms, and jargon definitions"),
                Subsection::optional("1.7", "References")
                    .described("External documents, standards, or resources referenced"),
            ],
        },
        Section {
            number: "2",
            title: "System Requirements and Functional Requirements",
            description: Some("Detailed functional requirements that allow the system to perform as intended"),
            subsections: &[
                Subsection::required("2.1", "System Features and Functions")
                    .described("Break down system features that allow proper performance"),
                Subsection::optional("2.2", "If/Then Behaviors")
                    .described("Conditional logic and system responses"),
                Subsection::required("2.3", "Data Handling Logic")
                    .described("How the system processes, stores, and retrieves data"),
                Subsection::required("2.4", "System Workflows")
                    .described("Step-by-step processes and user journeys"),
                Subsection::optional("2.5", "Transaction Handling")
                    .described("How the system manages transactions and state"),
                Subsection::optional("2.6", "Administrative Functions")
                    .described("Admin panel, user management, and system administration"),
                Subsection::optional("2.7", "Regulatory and Compliance Needs")
                    .described("Legal, regulatory, and compliance requirements"),
                Subsection::required("2.8", "Performance Requirements")
                    .described("Speed, response time, throughput, and performance metrics"),
                Subsection::optional("2.9", "Screen Operations")
                    .described("Details of operations conducted for every screen"),
            ],
        },
        Section {
            number: "3",
            title: "External Interface Requirements",
            description: Some("Requirements ensuring the system communicates properly with external components"),
            subsections: &[
                Subsection::required("3.1", "User Interfaces")
                    .described("Content presentation, navigation, and user assistance"),
                Subsection::optional("3.2", "Hardware Interfaces")
                    .described("Characteristics of interfaces between software and hardware"),
                Subsection::required("3.3", "Software Interfaces")
                    .described("Connections with databases, libraries, and operating systems"),
                Subsection::required("3.4", "Communication Interfaces")
                    .described("Email, forms, APIs, and communication protocols"),
            ],
        },
        Section {
            number: "4",
            title: "Non-Functional Requirements (NFRs)",
            description: Some("Determine HOW the system will implement features (the 'Itys')"),
            subsections: &[
                Subsection::required("4.1", "Security")
                    .described("Protection of sensitive information and data security measures"),
                Subsection::required("4.2", "Capacity")
                    .described("Current and future storage needs, scaling plans"),
                Subsection::required("4.3", "Compatibility")
                    .described("Minimum hardware requirements, OS support, browser compatibility"),
                Subsection::required("4.4", "Reliability and Availability")
                    .described("Expected usage frequency and critical failure time"),
                Subsection::required("4.5", "Scalability")
                    .described("Highest workloads under which system performs as expected"),
                Subsection::required("4.6", "Maintainability")
                    .described("Continuous integration, deployment, and maintenance procedures"),
                Subsection::required("4.7", "Usability")
                    .described("Ease of use, user experience, and accessibility"),
                Subsection::optional("4.8", "Regulatory Requirements")
                    .described("Compliance with industry standards and regulations"),
                Subsection::optional("4.9", "Environmental Requirements")
                    .described("Operating environment conditions and constraints"),
            ],
        },
        Section {
            number: "Appendix",
            title: "Appendices",
            description: Some("Supporting materials, diagrams, and additional documentation"),
            subsections: &[
                Subsection::optional("A", "Data Flow Diagrams")
                    .described("Visual representation of data flow through the system"),
                Subsection::optional("B", "Use Case Diagrams")
                    .described("User interaction scenarios and use cases"),
                Subsection::optional("C", "System Architecture Diagrams")
                    .described("High-level system architecture and component interactions"),
            ],
        },
    ],
};

const SPRINT_REPORT: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "SPRINT_REPORT",
    name: "Sprint Report",
    description: "Comprehensive agile sprint summary and metrics",
    category: "Agile",
    icon: "Calendar",
    sections: &[
        Section {
            number: "1",
            title: "Executive Summary",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Sprint Overview"),
                Subsection::required("1.2", "Sprint Goals Achievement"),
                Subsection::required("1.3", "Overall Status"),
            ],
        },
        Section {
            number: "2",
            title: "Sprint Metrics",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Velocity and Capacity"),
                Subsection::required("2.2", "Burndown Analysis"),
                Subsection::required("2.3", "Task Completion Rate"),
                Subsection::required("2.4", "Story Points Delivered"),
            ],
        },
        Section {
            number: "3",
            title: "Work Completed",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Completed Tasks"),
                Subsection::required("3.2", "Key Achievements"),
                Subsection::required("3.3", "Business Value Delivered"),
            ],
        },
        Section {
            number: "4",
            title: "Challenges and Blockers",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Blockers Encountered"),
                Subsection::required("4.2", "Unfinished Work"),
                Subsection::optional("4.3", "Risk Mitigation Actions"),
            ],
        },
        Section {
            number: "5",
            title: "Team Insights",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Team Performance"),
                Subsection::required("5.2", "Workload Distribution"),
                Subsection::required("5.3", "Process Improvements"),
            ],
        },
        Section {
            number: "6",
            title: "Next Steps",
            description: None,
            subsections: &[
                Subsection::required("6.1", "Upcoming Sprint Goals"),
                Subsection::required("6.2", "Action Items"),
                Subsection::required("6.3", "Recommendations"),
            ],
        },
    ],
};

const ARCHITECTURE_DOC: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "ARCHITECTURE_DOC",
    name: "Software Architecture Document",
    description: "arc42-based architecture documentation",
    category: "Architecture",
    icon: "Layers",
    sections: &[
        Section {
            number: "1",
            title: "Introduction and Goals",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Requirements Overview"),
                Subsection::required("1.2", "Quality Goals"),
                Subsection::required("1.3", "Stakeholders"),
            ],
        },
        Section {
            number: "2",
            title: "Architecture Constraints",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Technical Constraints"),
                Subsection::optional("2.2", "Organizational Constraints"),
            ],
        },
        Section {
            number: "3",
            title: "System Scope and Context",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Business Context"),
                Subsection::required("3.2", "Technical Context"),
            ],
        },
        Section {
            number: "4",
            title: "Solution Strategy",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Technology Decisions"),
                Subsection::required("4.2", "System Decomposition"),
            ],
        },
        Section {
            number: "5",
            title: "Building Block View",
            description: None,
            subsections: &[
                Subsection::required("5.1", "System Overview"),
                Subsection::required("5.2", "Component Architecture"),
            ],
        },
        Section {
            number: "6",
            title: "Runtime View",
            description: None,
            subsections: &[
                Subsection::required("6.1", "Key Scenarios"),
                Subsection::required("6.2", "Component Interactions"),
            ],
        },
        Section {
            number: "7",
            title: "Deployment View",
            description: None,
            subsections: &[
                Subsection::required("7.1", "Infrastructure Overview"),
                Subsection::required("7.2", "Deployment Architecture"),
            ],
        },
        Section {
            number: "8",
            title: "Crosscutting Concepts",
            description: None,
            subsections: &[
                Subsection::required("8.1", "Security Concepts"),
                Subsection::required("8.2", "Error Handling Strategy"),
            ],
        },
        Section {
            number: "9",
            title: "Architecture Decisions",
            description: None,
            subsections: &[
                Subsection::required("9.1", "Key Decisions and Rationale"),
            ],
        },
        Section {
            number: "10",
            title: "Quality Requirements",
            description: None,
            subsections: &[
                Subsection::required("10.1", "Performance Requirements"),
                Subsection::required("10.2", "Security Requirements"),
            ],
        },
        Section {
            number: "11",
            title: "Risks and Technical Debt",
            description: None,
            subsections: &[
                Subsection::required("11.1", "Known Risks"),
                Subsection::optional("11.2", "Technical Debt Items"),
            ],
        },
        Section {
            number: "12",
            title: "Glossary",
            description: None,
            subsections: &[
                Subsection::required("12.1", "Terms and Definitions"),
            ],
        },
    ],
};

const USER_MANUAL: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "USER_MANUAL",
    name: "User Manual",
    description: "End-user documentation and guides",
    category: "User Documentation",
    icon: "BookOpen",
    sections: &[
        Section {
            number: "1",
            title: "Introduction",
            description: None,
            subsections: &[
                Subsection::required("1.1", "About This Manual"),
                Subsection::required("1.2", "Intended Audience"),
                Subsection::required("1.3", "System Requirements"),
            ],
        },
        Section {
            number: "2",
            title: "Getting Started",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Installation"),
                Subsection::required("2.2", "First-Time Setup"),
                Subsection::required("2.3", "Quick Start Guide"),
            ],
        },
        Section {
            number: "3",
            title: "Features and Functionality",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Core Features"),
                Subsection::optional("3.2", "Advanced Features"),
            ],
        },
        Section {
            number: "4",
            title: "Step-by-Step Guides",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Common Tasks and Workflows"),
            ],
        },
        Section {
            number: "5",
            title: "Troubleshooting",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Common Issues and Solutions"),
                Subsection::required("5.2", "Error Messages"),
                Subsection::required("5.3", "Support Contact Information"),
            ],
        },
    ],
};

const API_DOCUMENTATION: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "API_DOCUMENTATION",
    name: "API Documentation",
    description: "REST API reference and integration guide",
    category: "Technical",
    icon: "Code",
    sections: &[
        Section {
            number: "1",
            title: "Overview",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Introduction"),
                Subsection::required("1.2", "Base URL and Versioning"),
                Subsection::required("1.3", "Authentication"),
            ],
        },
        Section {
            number: "2",
            title: "Getting Started",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Quick Start Guide"),
                Subsection::required("2.2", "API Keys and Authorization"),
                Subsection::required("2.3", "Rate Limiting"),
            ],
        },
        Section {
            number: "3",
            title: "API Reference",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Endpoints"),
                Subsection::required("3.2", "Request/Response Format"),
                Subsection::required("3.3", "Data Models"),
            ],
        },
        Section {
            number: "4",
            title: "Error Handling",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Error Codes and Messages"),
            ],
        },
        Section {
            number: "5",
            title: "Code Examples",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Sample Requests"),
                Subsection::optional("5.2", "Integration Examples"),
            ],
        },
    ],
};

const TEST_PLAN: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "TEST_PLAN",
    name: "Test Plan Document",
    description: "Comprehensive testing strategy and test cases",
    category: "Quality Assurance",
    icon: "CheckCircle",
    sections: &[
        Section {
            number: "1",
            title: "Introduction",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Purpose and Scope"),
                Subsection::required("1.2", "Test Objectives"),
            ],
        },
        Section {
            number: "2",
            title: "Test Strategy",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Test Approach"),
                Subsection::required("2.2", "Test Levels"),
                Subsection::required("2.3", "Test Types"),
            ],
        },
        Section {
            number: "3",
            title: "Test Environment",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Requirements"),
                Subsection::required("3.2", "Test Tools"),
            ],
        },
        Section {
            number: "4",
            title: "Test Cases",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Functional Test Cases"),
                Subsection::required("4.2", "Non-Functional Test Cases"),
            ],
        },
        Section {
            number: "5",
            title: "Test Schedule and Deliverables",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Test Timeline"),
                Subsection::required("5.2", "Test Reports"),
            ],
        },
    ],
};

const PROJECT_CHARTER: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "PROJECT_CHARTER",
    name: "Project Charter",
    description: "Project authorization and high-level plan",
    category: "Project Management",
    icon: "Flag",
    sections: &[
        Section {
            number: "1",
            title: "Project Overview",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Project Purpose"),
                Subsection::required("1.2", "Project Description"),
                Subsection::required("1.3", "Business Case"),
            ],
        },
        Section {
            number: "2",
            title: "Project Scope",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Objectives and Deliverables"),
                Subsection::required("2.2", "Success Criteria"),
                Subsection::required("2.3", "Out of Scope"),
            ],
        },
        Section {
            number: "3",
            title: "Stakeholders",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Project Sponsor"),
                Subsection::required("3.2", "Project Team"),
                Subsection::required("3.3", "Key Stakeholders"),
            ],
        },
        Section {
            number: "4",
            title: "Project Timeline and Budget",
            description: None,
            subsections: &[
                Subsection::required("4.1", "Key Milestones"),
                Subsection::required("4.2", "Resource Requirements"),
            ],
        },
        Section {
            number: "5",
            title: "Risks and Assumptions",
            description: None,
            subsections: &[
                Subsection::required("5.1", "High-Level Risks"),
                Subsection::required("5.2", "Key Assumptions"),
            ],
        },
    ],
};

const DESIGN_DOCUMENT: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "DESIGN_DOCUMENT",
    name: "Design Document",
    description: "Detailed technical design specifications",
    category: "Design",
    icon: "Layout",
    sections: &[
        Section {
            number: "1",
            title: "Introduction",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Purpose and Scope"),
                Subsection::required("1.2", "Design Goals"),
            ],
        },
        Section {
            number: "2",
            title: "System Overview",
            description: None,
            subsections: &[
                Subsection::required("2.1", "System Architecture"),
                Subsection::required("2.2", "Component Overview"),
            ],
        },
        Section {
            number: "3",
            title: "Detailed Design",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Data Model"),
                Subsection::required("3.2", "Component Interactions"),
            ],
        },
        Section {
            number: "4",
            title: "Interface Design",
            description: None,
            subsections: &[
                Subsection::required("4.1", "User Interface"),
                Subsection::required("4.2", "API Interfaces"),
            ],
        },
        Section {
            number: "5",
            title: "Database Design",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Schema Design"),
                Subsection::required("5.2", "Data Dictionary"),
            ],
        },
        Section {
            number: "6",
            title: "Security Design",
            description: None,
            subsections: &[
                Subsection::required("6.1", "Authentication and Authorization"),
                Subsection::required("6.2", "Data Protection"),
            ],
        },
    ],
};

const TECHNICAL_SPEC: DocumentTypeDefinition = DocumentTypeDefinition {
    key: "TECHNICAL_SPEC",
    name: "Technical Specification",
    description: "Detailed technical implementation specification",
    category: "Technical",
    icon: "FileCode",
    sections: &[
        Section {
            number: "1",
            title: "Overview",
            description: None,
            subsections: &[
                Subsection::required("1.1", "Technical Summary"),
                Subsection::required("1.2", "Technology Stack"),
            ],
        },
        Section {
            number: "2",
            title: "System Components",
            description: None,
            subsections: &[
                Subsection::required("2.1", "Backend Services"),
                Subsection::required("2.2", "Frontend Components"),
                Subsection::required("2.3", "Database Design"),
            ],
        },
        Section {
            number: "3",
            title: "Implementation Details",
            description: None,
            subsections: &[
                Subsection::required("3.1", "Core Algorithms"),
                Subsection::required("3.2", "Data Flow"),
            ],
        },
        Section {
            number: "4",
            title: "Integration Points",
            description: None,
            subsections: &[
                Subsection::required("4.1", "External APIs"),
                Subsection::optional("4.2", "Third-Party Services"),
            ],
        },
        Section {
            number: "5",
            title: "Deployment and Operations",
            description: None,
            subsections: &[
                Subsection::required("5.1", "Deployment Architecture"),
                Subsection::required("5.2", "Monitoring and Logging"),
            ],
        },
    ],
};

