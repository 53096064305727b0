use serde::{Deserialize, Serialize};

/// One row of the `departments` table. The key is caller-supplied; the
/// database alone enforces its uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub department_id: i32,
    pub department_name: String,
}

// ── Request payload ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateDepartment {
    pub department_id: i32,
    pub department_name: String,
}
