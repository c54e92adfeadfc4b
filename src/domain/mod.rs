pub mod brand;
pub mod item_category;
pub mod master_material;
pub mod price_revision;
pub mod site;
pub mod supplier;
pub mod supplier_price;
