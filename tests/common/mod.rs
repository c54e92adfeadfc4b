//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use bill_tracker::db::{DbPool, establish_connection_pool, run_migrations};
use bill_tracker::domain::item_category::{ItemCategory, NewItemCategory};
use bill_tracker::domain::master_material::{MasterMaterial, NewMasterMaterial};
use bill_tracker::domain::supplier::{NewSupplier, Supplier};
use bill_tracker::repository::{
    DieselRepository, ItemCategoryWriter, MasterMaterialWriter, SupplierWriter,
};

/// Temporary database used in integration tests.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);

        let pool = establish_connection_pool(&path.to_string_lossy())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let base = self.path.to_string_lossy().to_string();
        std::fs::remove_file(&self.path).ok();
        std::fs::remove_file(format!("{base}-shm")).ok();
        std::fs::remove_file(format!("{base}-wal")).ok();
    }
}

/// One category, supplier and material to hang prices on.
pub struct Catalogue {
    pub category: ItemCategory,
    pub supplier: Supplier,
    pub material: MasterMaterial,
}

pub fn seed_catalogue(repo: &DieselRepository) -> Catalogue {
    let category = repo
        .create_item_category(&NewItemCategory::new("Cement"))
        .expect("category");
    let supplier = repo
        .create_supplier(&NewSupplier::new("Acme Building Supplies").with_email("sales@acme.test"))
        .expect("supplier");
    let material = repo
        .create_master_material(
            &NewMasterMaterial::new("Portland Cement", "KG", category.id).with_code("CEM-OPC-50"),
        )
        .expect("material");

    Catalogue {
        category,
        supplier,
        material,
    }
}
