//! Field tables and worked examples for every grid the API serves.
//!
//! Each domain is plain data; the prompt builder, validator and router are
//! shared across all of them.

use gridprompt_common::{DomainSchema, FieldSpec, PromptExample};

pub const SIMPLE_GRID: DomainSchema = DomainSchema {
    name: "simplegrid",
    route: "/api/simplegrid-prompt",
    fields: &[
        FieldSpec::string("name"),
        FieldSpec::number("age"),
        FieldSpec::string("email"),
        FieldSpec::list("status", &["active", "inactive", "pending"]),
        FieldSpec::date("created_at"),
        FieldSpec::string("country"),
        FieldSpec::number("last_month_sales"),
    ],
    notes: &[
        "Countries: Must start with capital letter, united states must be USA, united kingdom must be UK",
    ],
    examples: &[
        PromptExample {
            prompt: "show users with last month sales between 1000 and 1500",
            output: r#"{ "property": "last_month_sales", "value": { "gt": 1000, "lt": 1500 }, "type": "number" }"#,
        },
        PromptExample {
            prompt: "show users with name keith",
            output: r#"{ "property": "name", "value": "keith", "operator": "like", "type": "string" }"#,
        },
        PromptExample {
            prompt: "show users created on march 2021",
            output: r#"{ "property": "created_at", "value": { "gt": "2021-03-01", "lt": "2021-03-31" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show users created on march 21st, 2021",
            output: r#"{ "property": "created_at", "value": { "eq": "2021-03-21" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show users created on 2021",
            output: r#"{ "property": "created_at", "value": { "gt": "2021-01-01", "lt": "2021-12-31" }, "type": "date" }"#,
        },
    ],
};

pub const BANKING: DomainSchema = DomainSchema {
    name: "banking",
    route: "/api/banking-prompt",
    fields: &[
        FieldSpec::string("loan_id"),
        FieldSpec::string("borrower_name"),
        FieldSpec::list(
            "loan_type",
            &["Personal", "Auto", "Mortgage", "Business", "Education"],
        ),
        FieldSpec::number("principal_amount"),
        FieldSpec::number("interest_rate"),
        FieldSpec::number("remaining_balance"),
        FieldSpec::date("next_payment_due"),
        FieldSpec::list("status", &["Current", "Overdue"]),
    ],
    notes: &[],
    examples: &[
        PromptExample {
            prompt: "show borrowers that borrowed between 1000 and 1500",
            output: r#"{ "property": "principal_amount", "value": { "gt": 1000, "lt": 1500 }, "type": "number" }"#,
        },
        PromptExample {
            prompt: "show borrowers with name henry",
            output: r#"{ "property": "borrower_name", "value": "henry", "operator": "like", "type": "string" }"#,
        },
        PromptExample {
            prompt: "show users with due date between october 25th and november 1st, 2025",
            output: r#"{ "property": "next_payment_due", "value": { "gt": "2025-10-25", "lt": "2025-11-01" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show due dates on march 2025",
            output: r#"{ "property": "next_payment_due", "value": { "gt": "2025-03-01", "lt": "2025-03-31" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show due dates on march 21st, 2025",
            output: r#"{ "property": "next_payment_due", "value": { "eq": "2025-03-21" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show due dates on 2021",
            output: r#"{ "property": "next_payment_due", "value": { "gt": "2021-01-01", "lt": "2021-12-31" }, "type": "date" }"#,
        },
    ],
};

pub const HEALTHCARE: DomainSchema = DomainSchema {
    name: "healthcare",
    route: "/api/healthcare-prompt",
    fields: &[
        FieldSpec::string("patient_id"),
        FieldSpec::string("patient_name"),
        FieldSpec::number("age"),
        FieldSpec::list("gender", &["Male", "Female", "Other"]),
        FieldSpec::list(
            "blood_type",
            &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"],
        ),
        FieldSpec::list(
            "department",
            &[
                "Cardiology",
                "Neurology",
                "Oncology",
                "Pediatrics",
                "Orthopedics",
                "Emergency",
            ],
        ),
        FieldSpec::string("attending_physician"),
        FieldSpec::date("admission_date"),
        FieldSpec::date("discharge_date"),
        FieldSpec::number("billing_amount"),
        FieldSpec::boolean("insured"),
        FieldSpec::list("status", &["Admitted", "Discharged", "Outpatient"]),
    ],
    notes: &["Booleans: true/false only, use \"eq\""],
    examples: &[
        PromptExample {
            prompt: "show patients billed between 500 and 2000",
            output: r#"{ "property": "billing_amount", "value": { "gt": 500, "lt": 2000 }, "type": "number" }"#,
        },
        PromptExample {
            prompt: "show patients treated by doctor smith",
            output: r#"{ "property": "attending_physician", "value": "smith", "operator": "like", "type": "string" }"#,
        },
        PromptExample {
            prompt: "show patients admitted on january 2024",
            output: r#"{ "property": "admission_date", "value": { "gt": "2024-01-01", "lt": "2024-01-31" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show patients admitted on february 14th, 2024",
            output: r#"{ "property": "admission_date", "value": { "eq": "2024-02-14" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show patients admitted on 2023",
            output: r#"{ "property": "admission_date", "value": { "gt": "2023-01-01", "lt": "2023-12-31" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show uninsured patients",
            output: r#"{ "property": "insured", "value": false, "operator": "eq", "type": "boolean" }"#,
        },
    ],
};

pub const SCHOOL: DomainSchema = DomainSchema {
    name: "school",
    route: "/api/school-prompt",
    fields: &[
        FieldSpec::string("student_id"),
        FieldSpec::string("full_name"),
        FieldSpec::string("grade"),
        FieldSpec::number("age"),
        FieldSpec::list("gender", &["Male", "Female", "Not Specified"]),
        FieldSpec::date("enrollment_date"),
        FieldSpec::list("status", &["Active", "Graduated"]),
        FieldSpec::string("guardian_name"),
        FieldSpec::string("guardian_contact"),
        FieldSpec::number("avg_score"),
        FieldSpec::list("letter_grade", &["A", "B", "C", "D", "E", "F"]),
    ],
    notes: &[],
    examples: &[
        PromptExample {
            prompt: "show students with a score between 70 and 90",
            output: r#"{ "property": "avg_score", "value": { "gt": 70, "lt": 90 }, "type": "number" }"#,
        },
        PromptExample {
            prompt: "show students with name Ella",
            output: r#"{ "property": "full_name", "value": "ella", "operator": "like", "type": "string" }"#,
        },
        PromptExample {
            prompt: "show students enrolled on march 2021",
            output: r#"{ "property": "enrollment_date", "value": { "gt": "2021-03-01", "lt": "2021-03-31" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show students enrolled on march 21st, 2021",
            output: r#"{ "property": "enrollment_date", "value": { "eq": "2021-03-21" }, "type": "date" }"#,
        },
        PromptExample {
            prompt: "show students enrolled on 2021",
            output: r#"{ "property": "enrollment_date", "value": { "gt": "2021-01-01", "lt": "2021-12-31" }, "type": "date" }"#,
        },
    ],
};

/// Every served domain, in registration order.
pub const ALL: [&DomainSchema; 4] = [&SIMPLE_GRID, &BANKING, &HEALTHCARE, &SCHOOL];
