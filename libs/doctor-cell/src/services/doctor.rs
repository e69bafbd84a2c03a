use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_models::profile::{Doctor, UserRow};

use crate::models::{DoctorSearchQuery, RegisterDoctorRequest, UpdateDoctorRequest};

const DEFAULT_LIMIT: i32 = 50;

pub struct DoctorService {
    store: StoreClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn find_by_id(&self, doctor_id: Uuid) -> Result<Option<Doctor>> {
        let path = format!("/rest/v1/users?id=eq.{}&role=eq.doctor", doctor_id);
        let rows: Vec<UserRow> = self.store.select(&path).await?;
        Ok(rows.first().and_then(|row| row.to_doctor()))
    }

    /// Insert a new doctor row with a freshly assigned identifier.
    pub async fn register(&self, request: RegisterDoctorRequest) -> Result<Doctor> {
        debug!("Registering doctor {}", request.email);

        let row = json!({
            "id": Uuid::new_v4(),
            "email": request.email,
            "name": request.name,
            "date_of_birth": request.date_of_birth,
            "phone_number": request.phone_number,
            "address": request.address,
            "city": request.city,
            "region": request.region,
            "postal_code": request.postal_code,
            "country": request.country,
            "role": "doctor",
            "order_id": request.order_id,
            "specialties": request.specialties,
        });

        let inserted: UserRow = self.store.insert("/rest/v1/users", row).await?;
        inserted
            .to_doctor()
            .ok_or_else(|| anyhow!("inserted row is not a doctor"))
    }

    /// Overwrite the mutable profile fields of an existing doctor.
    pub async fn update(&self, doctor_id: Uuid, request: UpdateDoctorRequest) -> Result<Doctor> {
        debug!("Updating doctor {}", doctor_id);

        let changes = json!({
            "address": request.address,
            "city": request.city,
            "country": request.country,
            "date_of_birth": request.date_of_birth,
            "phone_number": request.phone_number,
            "postal_code": request.postal_code,
            "region": request.region,
            "specialties": request.specialties,
        });

        let path = format!("/rest/v1/users?id=eq.{}&role=eq.doctor", doctor_id);
        let updated: UserRow = self.store.update(&path, changes).await?;
        updated
            .to_doctor()
            .ok_or_else(|| anyhow!("updated row is not a doctor"))
    }

    /// Directory search: exact name, exact order id, OR-membership over
    /// the supplied specialty set. Ordered by id for stable paging.
    pub async fn search(&self, query: &DoctorSearchQuery) -> Result<Vec<Doctor>> {
        let mut parts = vec!["role=eq.doctor".to_string()];

        if let Some(name) = &query.name {
            parts.push(format!("name=eq.{}", urlencoding::encode(name)));
        }
        if let Some(order_id) = &query.order_id {
            parts.push(format!("order_id=eq.{}", urlencoding::encode(order_id)));
        }
        if !query.specialties.is_empty() {
            let set = query
                .specialties
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("specialties=ov.{{{}}}", set));
        }

        parts.push("order=id.asc".to_string());
        parts.push(format!("limit={}", query.limit.unwrap_or(DEFAULT_LIMIT)));
        parts.push(format!("offset={}", query.offset.unwrap_or(0)));

        let path = format!("/rest/v1/users?{}", parts.join("&"));
        debug!("Doctor search: {}", path);

        let rows: Vec<UserRow> = self.store.select(&path).await?;
        Ok(rows.iter().filter_map(|row| row.to_doctor()).collect())
    }
}
