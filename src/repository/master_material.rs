use diesel::prelude::*;

use crate::domain::master_material::{
    MasterMaterial as DomainMasterMaterial, MasterMaterialListQuery,
    NewMasterMaterial as DomainNewMasterMaterial,
    UpdateMasterMaterial as DomainUpdateMasterMaterial,
};
use crate::models::master_material::{
    MasterMaterial as DbMasterMaterial, NewMasterMaterial as DbNewMasterMaterial,
    UpdateMasterMaterial as DbUpdateMasterMaterial,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MasterMaterialReader, MasterMaterialWriter};

impl MasterMaterialReader for DieselRepository {
    fn get_master_material_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMasterMaterial>> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let material = master_materials::table
            .filter(master_materials::id.eq(id))
            .first::<DbMasterMaterial>(&mut conn)
            .optional()?;

        Ok(material.map(DomainMasterMaterial::from))
    }

    fn get_master_material_by_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Option<DomainMasterMaterial>> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let material = master_materials::table
            .filter(master_materials::name.eq(name))
            .first::<DbMasterMaterial>(&mut conn)
            .optional()?;

        Ok(material.map(DomainMasterMaterial::from))
    }

    fn get_master_material_by_code(
        &self,
        code: &str,
    ) -> RepositoryResult<Option<DomainMasterMaterial>> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let material = master_materials::table
            .filter(master_materials::material_code.eq(code))
            .first::<DbMasterMaterial>(&mut conn)
            .optional()?;

        Ok(material.map(DomainMasterMaterial::from))
    }

    fn list_master_materials(
        &self,
        query: MasterMaterialListQuery,
    ) -> RepositoryResult<Vec<DomainMasterMaterial>> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let mut items = master_materials::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = query.item_category_id {
            items = items.filter(master_materials::item_category_id.eq(category_id));
        }

        if let Some(brand_id) = query.brand_id {
            items = items.filter(master_materials::brand_id.eq(brand_id));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{term}%");
            items = items.filter(
                master_materials::name
                    .like(pattern.clone())
                    .or(master_materials::material_code.like(pattern)),
            );
        }

        let materials = items
            .order((master_materials::name.asc(), master_materials::id.asc()))
            .load::<DbMasterMaterial>(&mut conn)?;

        Ok(materials.into_iter().map(DomainMasterMaterial::from).collect())
    }
}

impl MasterMaterialWriter for DieselRepository {
    fn create_master_material(
        &self,
        new_material: &DomainNewMasterMaterial,
    ) -> RepositoryResult<DomainMasterMaterial> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let insertable = DbNewMasterMaterial::from(new_material);

        let created = diesel::insert_into(master_materials::table)
            .values(&insertable)
            .get_result::<DbMasterMaterial>(&mut conn)?;

        Ok(created.into())
    }

    fn update_master_material(
        &self,
        id: i32,
        updates: &DomainUpdateMasterMaterial,
    ) -> RepositoryResult<DomainMasterMaterial> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let updated = diesel::update(master_materials::table.filter(master_materials::id.eq(id)))
            .set(&DbUpdateMasterMaterial::from(updates))
            .get_result::<DbMasterMaterial>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_master_material(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::master_materials;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(master_materials::table.filter(master_materials::id.eq(id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
