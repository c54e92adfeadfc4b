use mockall::mock;

use super::{
    BrandReader, BrandWriter, ItemCategoryReader, ItemCategoryWriter, MasterMaterialReader,
    MasterMaterialWriter, PriceRevisionReader, SiteReader, SiteWriter, SupplierPriceReader,
    SupplierPriceWriter, SupplierReader, SupplierWriter,
};
use crate::domain::{
    brand::{Brand, BrandListQuery, NewBrand, UpdateBrand, UpdateBrandImage},
    item_category::{ItemCategory, NewItemCategory, UpdateItemCategory},
    master_material::{
        MasterMaterial, MasterMaterialListQuery, NewMasterMaterial, UpdateMasterMaterial,
    },
    price_revision::{PriceChange, PriceRevisionView},
    site::{NewSite, Site, UpdateSite},
    supplier::{NewSupplier, Supplier, SupplierListQuery, UpdateSupplier},
    supplier_price::{
        ActivePriceQuery, NewSupplierPrice, OverlapQuery, SupplierPrice, SupplierPriceListQuery,
        SupplierPriceView, UpdateSupplierPrice,
    },
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub SupplierReader {}

    impl SupplierReader for SupplierReader {
        fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
        fn get_supplier_by_name(&self, name: &str) -> RepositoryResult<Option<Supplier>>;
        fn get_supplier_by_email(&self, email: &str) -> RepositoryResult<Option<Supplier>>;
        fn list_suppliers(&self, query: SupplierListQuery) -> RepositoryResult<Vec<Supplier>>;
    }
}

mock! {
    pub SupplierWriter {}

    impl SupplierWriter for SupplierWriter {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(&self, id: i32, updates: &UpdateSupplier) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ItemCategoryReader {}

    impl ItemCategoryReader for ItemCategoryReader {
        fn get_item_category_by_id(&self, id: i32) -> RepositoryResult<Option<ItemCategory>>;
        fn get_item_category_by_name(&self, name: &str) -> RepositoryResult<Option<ItemCategory>>;
        fn list_item_categories(&self) -> RepositoryResult<Vec<ItemCategory>>;
    }
}

mock! {
    pub ItemCategoryWriter {}

    impl ItemCategoryWriter for ItemCategoryWriter {
        fn create_item_category(&self, new_category: &NewItemCategory) -> RepositoryResult<ItemCategory>;
        fn update_item_category(&self, id: i32, updates: &UpdateItemCategory) -> RepositoryResult<ItemCategory>;
        fn delete_item_category(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
        fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<Brand>>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
        fn update_brand_image(&self, id: i32, image: &UpdateBrandImage) -> RepositoryResult<Brand>;
        fn delete_brand(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SiteReader {}

    impl SiteReader for SiteReader {
        fn get_site_by_id(&self, id: i32) -> RepositoryResult<Option<Site>>;
        fn get_site_by_name(&self, name: &str) -> RepositoryResult<Option<Site>>;
        fn list_sites(&self) -> RepositoryResult<Vec<Site>>;
    }
}

mock! {
    pub SiteWriter {}

    impl SiteWriter for SiteWriter {
        fn create_site(&self, new_site: &NewSite) -> RepositoryResult<Site>;
        fn update_site(&self, id: i32, updates: &UpdateSite) -> RepositoryResult<Site>;
        fn delete_site(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub MasterMaterialReader {}

    impl MasterMaterialReader for MasterMaterialReader {
        fn get_master_material_by_id(&self, id: i32) -> RepositoryResult<Option<MasterMaterial>>;
        fn get_master_material_by_name(&self, name: &str) -> RepositoryResult<Option<MasterMaterial>>;
        fn get_master_material_by_code(&self, code: &str) -> RepositoryResult<Option<MasterMaterial>>;
        fn list_master_materials(&self, query: MasterMaterialListQuery) -> RepositoryResult<Vec<MasterMaterial>>;
    }
}

mock! {
    pub MasterMaterialWriter {}

    impl MasterMaterialWriter for MasterMaterialWriter {
        fn create_master_material(&self, new_material: &NewMasterMaterial) -> RepositoryResult<MasterMaterial>;
        fn update_master_material(&self, id: i32, updates: &UpdateMasterMaterial) -> RepositoryResult<MasterMaterial>;
        fn delete_master_material(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SupplierPriceReader {}

    impl SupplierPriceReader for SupplierPriceReader {
        fn get_supplier_price_by_id(&self, id: i32) -> RepositoryResult<Option<SupplierPrice>>;
        fn get_supplier_price_view(&self, id: i32) -> RepositoryResult<Option<SupplierPriceView>>;
        fn list_supplier_prices(&self, query: SupplierPriceListQuery) -> RepositoryResult<Vec<SupplierPriceView>>;
        fn find_active_supplier_price(&self, query: &ActivePriceQuery) -> RepositoryResult<Option<SupplierPriceView>>;
        fn find_overlapping_supplier_prices(&self, query: &OverlapQuery) -> RepositoryResult<Vec<SupplierPrice>>;
    }
}

mock! {
    pub SupplierPriceWriter {}

    impl SupplierPriceWriter for SupplierPriceWriter {
        fn create_supplier_price(&self, new_price: &NewSupplierPrice, change: &PriceChange) -> RepositoryResult<SupplierPriceView>;
        fn update_supplier_price(&self, id: i32, updates: &UpdateSupplierPrice, change: &PriceChange) -> RepositoryResult<SupplierPriceView>;
        fn deactivate_supplier_price(&self, id: i32, change: &PriceChange) -> RepositoryResult<SupplierPriceView>;
    }
}

mock! {
    pub PriceRevisionReader {}

    impl PriceRevisionReader for PriceRevisionReader {
        fn list_price_revisions(&self, supplier_price_id: i32) -> RepositoryResult<Vec<PriceRevisionView>>;
    }
}
