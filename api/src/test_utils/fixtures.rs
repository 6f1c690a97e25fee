//! Test fixtures
//!
//! A small, fully linked credit-risk dataset shared by service, adapter
//! and HTTP tests.
//!
//! Shape of `standard_dataset()`:
//! - branches 1..=3 (Paris, Lyon, Marseille)
//! - professional situations for clients 101..=110
//! - family situations for clients 101..=109 (client 110 has none)
//! - applications 1..=10, application `i` owned by client `100 + i`
//!   at branch `(i - 1) % 3 + 1`
//! - contributions for applications 1..=4 only

use crate::domain::entities::{
    ApplicationId, ApplicationRecord, Branch, BranchId, ClientId, Contribution, FamilySituation,
    LoanApplication, ProfessionalSituation,
};

const CITIES: [(&str, &str); 3] = [
    ("Paris", "12 rue de Rivoli"),
    ("Lyon", "4 place Bellecour"),
    ("Marseille", "30 La Canebière"),
];

const DURATIONS: [i32; 10] = [12, 24, 36, 12, 60, 12, 24, 36, 12, 48];

const APPROVAL_FLAGS: [&str; 10] = [
    "oui", "Oui", "non", "OUI", "Non", "oui", "non", "Oui", "non", "oui",
];

/// Every table of the store, as domain values
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub branches: Vec<Branch>,
    pub professional_situations: Vec<ProfessionalSituation>,
    pub family_situations: Vec<FamilySituation>,
    pub applications: Vec<LoanApplication>,
    pub contributions: Vec<Contribution>,
    pub application_records: Vec<ApplicationRecord>,
}

pub fn standard_dataset() -> Dataset {
    let branches: Vec<Branch> = CITIES
        .iter()
        .zip(1..)
        .map(|((city, address), id)| branch(id, city, address))
        .collect();

    let professional_situations: Vec<ProfessionalSituation> =
        (101..=110).map(professional_situation).collect();

    let family_situations: Vec<FamilySituation> = (101..=109).map(family_situation).collect();

    let applications: Vec<LoanApplication> = (1..=10).map(application).collect();

    let contributions: Vec<Contribution> = (1..=4)
        .map(|id| Contribution {
            application_id: ApplicationId(id),
            amount: Some(5000 * id),
        })
        .collect();

    let mut dataset = Dataset {
        branches,
        professional_situations,
        family_situations,
        applications,
        contributions,
        application_records: Vec::new(),
    };
    dataset.application_records = flatten(&dataset);
    dataset
}

pub fn branch(id: i32, city: &str, address: &str) -> Branch {
    Branch {
        id: BranchId(id),
        city: Some(city.to_string()),
        address: Some(address.to_string()),
    }
}

pub fn professional_situation(client_id: i32) -> ProfessionalSituation {
    let regular = client_id % 2 == 1;
    ProfessionalSituation {
        client_id: ClientId(client_id),
        average_monthly_income: Some(1500 + (client_id - 100) * 250),
        income_regularity_code: Some(if regular { 1 } else { 0 }),
        income_regularity_label: Some(if regular { "regulier" } else { "irregulier" }.to_string()),
        employment_status_code: Some(client_id % 3),
        employment_regularity_label: Some(if regular { "CDI" } else { "CDD" }.to_string()),
    }
}

pub fn family_situation(client_id: i32) -> FamilySituation {
    FamilySituation {
        client_id: ClientId(client_id),
        marital_status: Some(if client_id % 2 == 0 { "marie" } else { "celibataire" }.to_string()),
        number_of_children: Some(client_id % 4),
        age: Some(25 + client_id - 100),
        client_name: Some(format!("Client {}", client_id)),
        activity_status: Some("actif".to_string()),
    }
}

pub fn application(id: i32) -> LoanApplication {
    let index = (id - 1) as usize;
    let flag = APPROVAL_FLAGS[index];
    LoanApplication {
        id: ApplicationId(id),
        operation_amount: Some(10_000 * id),
        duration: Some(DURATIONS[index]),
        client_id: Some(ClientId(100 + id)),
        approval_flag: Some(flag.to_string()),
        branch_id: Some(BranchId((id - 1) % 3 + 1)),
        processing_duration: Some(3 + id % 5),
        approval_code: Some(if flag.eq_ignore_ascii_case("oui") { 1 } else { 0 }),
    }
}

/// Build the denormalized records the way the external job would
fn flatten(dataset: &Dataset) -> Vec<ApplicationRecord> {
    dataset
        .applications
        .iter()
        .map(|app| {
            let branch = dataset.branches.iter().find(|b| Some(b.id) == app.branch_id);
            let pro = dataset
                .professional_situations
                .iter()
                .find(|p| Some(p.client_id) == app.client_id);
            let family = dataset
                .family_situations
                .iter()
                .find(|f| Some(f.client_id) == app.client_id);
            let contribution = dataset
                .contributions
                .iter()
                .find(|c| c.application_id == app.id);

            ApplicationRecord {
                application_id: app.id,
                operation_amount: app.operation_amount,
                duration: app.duration,
                client_id: app.client_id.map(i32::from),
                approval_flag: app.approval_flag.clone(),
                branch_id: app.branch_id.map(i32::from),
                processing_duration: app.processing_duration,
                approval_code: app.approval_code,
                contribution_amount: contribution.and_then(|c| c.amount),
                average_monthly_income: pro.and_then(|p| p.average_monthly_income),
                income_regularity_code: pro.and_then(|p| p.income_regularity_code),
                income_regularity_label: pro.and_then(|p| p.income_regularity_label.clone()),
                employment_status_code: pro.and_then(|p| p.employment_status_code),
                employment_regularity_label: pro
                    .and_then(|p| p.employment_regularity_label.clone()),
                marital_status: family.and_then(|f| f.marital_status.clone()),
                number_of_children: family.and_then(|f| f.number_of_children),
                age: family.and_then(|f| f.age),
                client_name: family.and_then(|f| f.client_name.clone()),
                activity_status: family.and_then(|f| f.activity_status.clone()),
                city: branch.and_then(|b| b.city.clone()),
                address: branch.and_then(|b| b.address.clone()),
            }
        })
        .collect()
}
