//! Demo fixture: two customers with projects, updates, documents and
//! messages, for exercising the portal without back-office tooling.

use chrono::NaiveDate;
use primo_core::project::{DocumentType, ProjectStatus, ProjectType, SenderType, UpdateType};
use primo_core::types::{DbId, Timestamp};
use primo_db::models::customer::{CreateCustomer, Customer};
use primo_db::models::project::CreateProject;
use primo_db::models::project_document::CreateProjectDocument;
use primo_db::models::project_message::CreateProjectMessage;
use primo_db::models::project_update::CreateProjectUpdate;
use primo_db::store::Store;
use serde::Serialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// Login for a seeded account, echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug)]
pub struct SeedOutcome {
    /// `false` when the fixture was already present.
    pub created: bool,
    pub accounts: Vec<DemoAccount>,
}

struct DemoCustomer {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    address: &'static str,
    suburb: &'static str,
    postcode: &'static str,
}

const CUSTOMERS: [DemoCustomer; 2] = [
    DemoCustomer {
        email: "john.smith@example.com",
        first_name: "John",
        last_name: "Smith",
        phone: "08 9123 4567",
        address: "123 Ocean Drive",
        suburb: "Cottesloe",
        postcode: "6011",
    },
    DemoCustomer {
        email: "sarah.jones@example.com",
        first_name: "Sarah",
        last_name: "Jones",
        phone: "08 9876 5432",
        address: "456 Beach Road",
        suburb: "Scarborough",
        postcode: "6019",
    },
];

fn accounts() -> Vec<DemoAccount> {
    CUSTOMERS
        .iter()
        .map(|c| DemoAccount {
            email: c.email,
            password: DEMO_PASSWORD,
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> Option<Timestamp> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Load the demo fixture unless the first demo account already exists.
pub async fn seed_demo_data(store: &dyn Store) -> AppResult<SeedOutcome> {
    if store
        .find_customer_by_email(CUSTOMERS[0].email)
        .await?
        .is_some()
    {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(SeedOutcome {
            created: false,
            accounts: accounts(),
        });
    }

    let password_hash = hash_password(DEMO_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut customers: Vec<Customer> = Vec::with_capacity(CUSTOMERS.len());
    for demo in &CUSTOMERS {
        let customer = store
            .create_customer(&CreateCustomer {
                email: demo.email.to_string(),
                password_hash: password_hash.clone(),
                first_name: demo.first_name.to_string(),
                last_name: demo.last_name.to_string(),
                phone: Some(demo.phone.to_string()),
                address: Some(demo.address.to_string()),
                suburb: Some(demo.suburb.to_string()),
                postcode: Some(demo.postcode.to_string()),
            })
            .await?;
        customers.push(customer);
    }
    let (john, sarah) = (&customers[0], &customers[1]);

    // --- Projects ---
    let resort_pool = store
        .create_project(&CreateProject {
            customer_id: john.id,
            title: "Luxury Resort-Style Pool".to_string(),
            description: Some(
                "Large family pool with spa, water features, and outdoor entertainment area. \
                 Includes infinity edge and integrated lighting system."
                    .to_string(),
            ),
            project_type: ProjectType::NewConstruction,
            status: Some(ProjectStatus::Construction),
            budget: Some(85_000),
            estimated_start_date: date(2024, 11, 15),
            estimated_end_date: date(2025, 2, 28),
            actual_start_date: date(2024, 11, 20),
            actual_end_date: None,
            progress_percentage: Some(65),
        })
        .await?;

    let equipment_upgrade = store
        .create_project(&CreateProject {
            customer_id: john.id,
            title: "Pool Equipment Upgrade".to_string(),
            description: Some(
                "Upgrade to energy-efficient pump and heating system with automated chlorination."
                    .to_string(),
            ),
            project_type: ProjectType::Renovation,
            status: Some(ProjectStatus::Completed),
            budget: Some(12_500),
            estimated_start_date: date(2024, 10, 1),
            estimated_end_date: date(2024, 10, 15),
            actual_start_date: date(2024, 10, 2),
            actual_end_date: date(2024, 10, 14),
            progress_percentage: Some(100),
        })
        .await?;

    let lap_pool = store
        .create_project(&CreateProject {
            customer_id: sarah.id,
            title: "Modern Lap Pool Design".to_string(),
            description: Some(
                "25-meter lap pool with contemporary design, automatic cover, and LED strip \
                 lighting."
                    .to_string(),
            ),
            project_type: ProjectType::NewConstruction,
            status: Some(ProjectStatus::Design),
            budget: Some(75_000),
            estimated_start_date: date(2025, 1, 15),
            estimated_end_date: date(2025, 4, 30),
            actual_start_date: None,
            actual_end_date: None,
            progress_percentage: Some(25),
        })
        .await?;

    // --- Updates ---
    let updates = [
        (
            resort_pool.id,
            "Plumbing Installation Progress",
            "Main drain and return lines installed. Spa jets and lighting conduits in progress.",
            UpdateType::Progress,
            55,
        ),
        (
            resort_pool.id,
            "Pool Shell Completed",
            "Concrete shell has been poured and is now curing. Next phase will begin excavation \
             for spa area.",
            UpdateType::Milestone,
            65,
        ),
        (
            equipment_upgrade.id,
            "Project Completed Successfully",
            "All equipment installed and tested. System is running efficiently with 30% energy \
             savings.",
            UpdateType::Completion,
            100,
        ),
        (
            lap_pool.id,
            "Design Phase Underway",
            "Initial site survey completed. 3D renderings and engineering drawings in development.",
            UpdateType::Milestone,
            25,
        ),
    ];
    for (project_id, title, description, update_type, progress) in updates {
        store
            .create_project_update(&CreateProjectUpdate {
                project_id,
                title: title.to_string(),
                description: description.to_string(),
                update_type,
                progress_percentage: Some(progress),
                images: Vec::new(),
            })
            .await?;
    }

    // --- Documents ---
    let documents = [
        (
            resort_pool.id,
            "Construction Contract",
            DocumentType::Contract,
            "/documents/resort-pool-contract.pdf",
        ),
        (
            resort_pool.id,
            "Council Building Permit",
            DocumentType::Permit,
            "/documents/resort-pool-permit.pdf",
        ),
        (
            equipment_upgrade.id,
            "Equipment Warranty",
            DocumentType::Warranty,
            "/documents/equipment-warranty.pdf",
        ),
        (
            lap_pool.id,
            "Concept Design Drawings",
            DocumentType::Design,
            "/documents/lap-pool-concepts.pdf",
        ),
    ];
    for (project_id, title, document_type, file_url) in documents {
        store
            .create_project_document(&CreateProjectDocument {
                project_id,
                title: title.to_string(),
                description: None,
                document_type,
                file_url: file_url.to_string(),
            })
            .await?;
    }

    // --- Messages ---
    let team = |project_id: DbId, name: &str, text: &str| CreateProjectMessage {
        project_id,
        sender_id: None,
        sender_name: name.to_string(),
        sender_type: SenderType::Team,
        message: text.to_string(),
    };
    let from = |project_id: DbId, customer: &Customer, text: &str| CreateProjectMessage {
        project_id,
        sender_id: Some(customer.id),
        sender_name: customer.full_name(),
        sender_type: SenderType::Customer,
        message: text.to_string(),
    };
    let messages = [
        team(
            resort_pool.id,
            "Mike Thompson",
            "Hi John! The pool shell looks fantastic. We're on track to start the spa excavation \
             next week. Any questions about the progress so far?",
        ),
        from(
            resort_pool.id,
            john,
            "Thanks Mike! Everything looks great. When do you think the lighting installation \
             will begin?",
        ),
        team(
            resort_pool.id,
            "Mike Thompson",
            "The lighting installation is scheduled for week 3 of January, right after the \
             plumbing is finalized. We'll keep you updated!",
        ),
        team(
            lap_pool.id,
            "Emma Wilson",
            "Hi Sarah! Your design concepts look amazing. We've incorporated all your feedback \
             into the latest 3D renderings. Would you like to schedule a review meeting?",
        ),
        from(
            lap_pool.id,
            sarah,
            "That sounds perfect! I'm available next Tuesday or Wednesday afternoon. Looking \
             forward to seeing the updated designs.",
        ),
    ];
    for message in &messages {
        store.create_project_message(message).await?;
    }

    tracing::info!(
        customers = customers.len(),
        projects = 3,
        "Demo data seeded"
    );

    Ok(SeedOutcome {
        created: true,
        accounts: accounts(),
    })
}
