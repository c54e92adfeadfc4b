use crate::db::{DbConnection, DbPool};
use crate::domain::brand::{Brand, BrandListQuery, NewBrand, UpdateBrand, UpdateBrandImage};
use crate::domain::item_category::{ItemCategory, NewItemCategory, UpdateItemCategory};
use crate::domain::master_material::{
    MasterMaterial, MasterMaterialListQuery, NewMasterMaterial, UpdateMasterMaterial,
};
use crate::domain::price_revision::{PriceChange, PriceRevisionView};
use crate::domain::site::{NewSite, Site, UpdateSite};
use crate::domain::supplier::{NewSupplier, Supplier, SupplierListQuery, UpdateSupplier};
use crate::domain::supplier_price::{
    ActivePriceQuery, NewSupplierPrice, OverlapQuery, SupplierPrice, SupplierPriceListQuery,
    SupplierPriceView, UpdateSupplierPrice,
};
use crate::repository::errors::RepositoryResult;

pub mod brand;
pub mod errors;
pub mod item_category;
pub mod master_material;
pub mod price_revision;
pub mod site;
pub mod supplier;
pub mod supplier_price;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over supplier records.
pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    /// Case-insensitive exact match on the supplier name.
    fn get_supplier_by_name(&self, name: &str) -> RepositoryResult<Option<Supplier>>;
    /// Case-insensitive exact match on the supplier email.
    fn get_supplier_by_email(&self, email: &str) -> RepositoryResult<Option<Supplier>>;
    fn list_suppliers(&self, query: SupplierListQuery) -> RepositoryResult<Vec<Supplier>>;
}

/// Write operations over supplier records.
pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(&self, id: i32, updates: &UpdateSupplier) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over item categories.
pub trait ItemCategoryReader {
    fn get_item_category_by_id(&self, id: i32) -> RepositoryResult<Option<ItemCategory>>;
    fn get_item_category_by_name(&self, name: &str) -> RepositoryResult<Option<ItemCategory>>;
    fn list_item_categories(&self) -> RepositoryResult<Vec<ItemCategory>>;
}

/// Write operations over item categories.
pub trait ItemCategoryWriter {
    fn create_item_category(
        &self,
        new_category: &NewItemCategory,
    ) -> RepositoryResult<ItemCategory>;
    fn update_item_category(
        &self,
        id: i32,
        updates: &UpdateItemCategory,
    ) -> RepositoryResult<ItemCategory>;
    fn delete_item_category(&self, id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over brands.
pub trait BrandReader {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
    /// Case-insensitive exact match on the brand name.
    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<Brand>>;
}

/// Write operations over brands.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
    fn update_brand_image(&self, id: i32, image: &UpdateBrandImage) -> RepositoryResult<Brand>;
    fn delete_brand(&self, id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over delivery sites.
pub trait SiteReader {
    fn get_site_by_id(&self, id: i32) -> RepositoryResult<Option<Site>>;
    fn get_site_by_name(&self, name: &str) -> RepositoryResult<Option<Site>>;
    fn list_sites(&self) -> RepositoryResult<Vec<Site>>;
}

/// Write operations over delivery sites.
pub trait SiteWriter {
    fn create_site(&self, new_site: &NewSite) -> RepositoryResult<Site>;
    fn update_site(&self, id: i32, updates: &UpdateSite) -> RepositoryResult<Site>;
    fn delete_site(&self, id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over the material catalogue.
pub trait MasterMaterialReader {
    fn get_master_material_by_id(&self, id: i32) -> RepositoryResult<Option<MasterMaterial>>;
    fn get_master_material_by_name(&self, name: &str) -> RepositoryResult<Option<MasterMaterial>>;
    fn get_master_material_by_code(&self, code: &str) -> RepositoryResult<Option<MasterMaterial>>;
    fn list_master_materials(
        &self,
        query: MasterMaterialListQuery,
    ) -> RepositoryResult<Vec<MasterMaterial>>;
}

/// Write operations over the material catalogue.
pub trait MasterMaterialWriter {
    fn create_master_material(
        &self,
        new_material: &NewMasterMaterial,
    ) -> RepositoryResult<MasterMaterial>;
    fn update_master_material(
        &self,
        id: i32,
        updates: &UpdateMasterMaterial,
    ) -> RepositoryResult<MasterMaterial>;
    fn delete_master_material(&self, id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over supplier price records.
///
/// Methods returning [`SupplierPriceView`] load the supplier and material
/// in the same query.
pub trait SupplierPriceReader {
    fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<SupplierPrice>>;
    fn get_supplier_price_view(&self, id: i32) -> RepositoryResult<Option<SupplierPriceView>>;
    /// Records matching the query, newest effective date first.
    fn list_supplier_prices(
        &self,
        query: SupplierPriceListQuery,
    ) -> RepositoryResult<Vec<SupplierPriceView>>;
    /// Active record in force on the query date. Among several matches the
    /// latest `effective_from_date` wins, then the latest `created_at`.
    fn find_active_supplier_price(
        &self,
        query: &ActivePriceQuery,
    ) -> RepositoryResult<Option<SupplierPriceView>>;
    /// Active records whose windows intersect the query window.
    fn find_overlapping_supplier_prices(
        &self,
        query: &OverlapQuery,
    ) -> RepositoryResult<Vec<SupplierPrice>>;
}

/// Write operations over supplier price records.
///
/// Every write appends the revision described by its [`PriceChange`] in the
/// same transaction. Creating and updating re-check the overlap rule inside
/// that transaction and fail with `OverlappingPrice` on a collision.
pub trait SupplierPriceWriter {
    fn create_supplier_price(
        &self,
        new_price: &NewSupplierPrice,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView>;
    fn update_supplier_price(
        &self,
        id: i32,
        updates: &UpdateSupplierPrice,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView>;
    /// Clear `is_active`, leaving the rest of the record untouched. Fails
    /// with `AlreadyInactive` when the record is no longer active at write
    /// time.
    fn deactivate_supplier_price(
        &self,
        id: i32,
        change: &PriceChange,
    ) -> RepositoryResult<SupplierPriceView>;
}

/// Read-only access to the append-only price revision log.
pub trait PriceRevisionReader {
    /// Entries for one price record, most recent change first.
    fn list_price_revisions(
        &self,
        supplier_price_id: i32,
    ) -> RepositoryResult<Vec<PriceRevisionView>>;
}
