use bill_tracker::domain::brand::{BrandListQuery, NewBrand, UpdateBrandImage};
use bill_tracker::domain::master_material::{MasterMaterialListQuery, NewMasterMaterial};
use bill_tracker::domain::price_revision::{
    INITIAL_PRICE_REASON, PRICE_DEACTIVATED_REASON, PriceChange,
};
use bill_tracker::domain::site::{NewSite, UpdateSite};
use bill_tracker::domain::supplier::{NewSupplier, SupplierListQuery, UpdateSupplier};
use bill_tracker::domain::supplier_price::{
    ActivePriceQuery, EffectiveWindow, NewSupplierPrice, OverlapQuery, SupplierPriceDraft,
    SupplierPriceListQuery, UpdateSupplierPrice,
};
use bill_tracker::repository::errors::RepositoryError;
use bill_tracker::repository::{
    BrandReader, BrandWriter, DieselRepository, ItemCategoryWriter, MasterMaterialReader,
    MasterMaterialWriter, PriceRevisionReader, SiteReader, SiteWriter, SupplierPriceReader,
    SupplierPriceWriter, SupplierReader, SupplierWriter,
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn new_price(
    catalogue: &common::Catalogue,
    price: Decimal,
    from: NaiveDate,
    to: Option<NaiveDate>,
) -> NewSupplierPrice {
    NewSupplierPrice::from_draft(
        SupplierPriceDraft {
            supplier_id: catalogue.supplier.id,
            master_material_id: catalogue.material.id,
            price,
            unit: "KG".to_string(),
            window: EffectiveWindow::new(from, to),
            is_active: None,
        },
        now(),
    )
}

fn create(repo: &DieselRepository, price: &NewSupplierPrice) -> i32 {
    repo.create_supplier_price(price, &PriceChange::initial("tester", now()))
        .expect("price created")
        .record
        .id
}

#[test]
fn test_supplier_repository_crud() {
    let test_db = common::TestDb::new("test_supplier_repository_crud.db");
    let repo = test_db.repo();

    let acme = repo
        .create_supplier(&NewSupplier::new("Acme").with_email("sales@acme.test"))
        .unwrap();
    repo.create_supplier(&NewSupplier::new("Builders Depot"))
        .unwrap();

    let found = repo.get_supplier_by_name("ACME").unwrap();
    assert_eq!(found.map(|supplier| supplier.id), Some(acme.id));
    let found = repo.get_supplier_by_email("Sales@Acme.test").unwrap();
    assert_eq!(found.map(|supplier| supplier.id), Some(acme.id));

    let err = repo
        .create_supplier(&NewSupplier::new("acme"))
        .expect_err("names are unique regardless of case");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let listed = repo
        .list_suppliers(SupplierListQuery::new().search("depot"))
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Builders Depot");

    let updated = repo
        .update_supplier(
            acme.id,
            &UpdateSupplier {
                name: "Acme Supplies".to_string(),
                contact_person: Some("Jane Doe".to_string()),
                contact_number: None,
                email: None,
                address: None,
                updated_at: now(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Acme Supplies");
    assert_eq!(updated.email, None);

    repo.delete_supplier(acme.id).unwrap();
    assert!(repo.get_supplier_by_id(acme.id).unwrap().is_none());

    let err = repo
        .delete_supplier(acme.id)
        .expect_err("deleting twice fails");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_master_material_requires_existing_category() {
    let test_db = common::TestDb::new("test_master_material_requires_existing_category.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let by_code = repo.get_master_material_by_code("cem-opc-50").unwrap();
    assert_eq!(by_code.map(|material| material.id), Some(catalogue.material.id));

    let err = repo
        .delete_item_category(catalogue.category.id)
        .expect_err("category is referenced by a material");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_create_price_appends_initial_revision() {
    let test_db = common::TestDb::new("test_create_price_appends_initial_revision.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let id = create(&repo, &new_price(&catalogue, dec!(100.25), date(2024, 1, 1), None));

    let stored = repo.get_supplier_price_by_id(id).unwrap().expect("stored");
    assert_eq!(stored.price, dec!(100.25));
    assert_eq!(stored.unit, "KG");
    assert!(stored.is_active);

    let revisions = repo.list_price_revisions(id).unwrap();
    assert_eq!(revisions.len(), 1);
    assert_eq!(revisions[0].revision.old_price, None);
    assert_eq!(revisions[0].revision.old_is_active, None);
    assert_eq!(revisions[0].revision.new_price, dec!(100.25));
    assert!(revisions[0].revision.new_is_active);
    assert_eq!(revisions[0].revision.changed_by_user, "tester");
    assert_eq!(
        revisions[0].revision.reason_for_change.as_deref(),
        Some(INITIAL_PRICE_REASON)
    );
}

#[test]
fn test_find_active_respects_window_bounds() {
    let test_db = common::TestDb::new("test_find_active_respects_window_bounds.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let bounded = create(
        &repo,
        &new_price(
            &catalogue,
            dec!(90),
            date(2023, 1, 1),
            Some(date(2023, 12, 31)),
        ),
    );
    let open = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));

    let active_on = |on_date| {
        repo.find_active_supplier_price(&ActivePriceQuery::new(
            catalogue.supplier.id,
            catalogue.material.id,
            "KG",
            on_date,
        ))
        .unwrap()
        .map(|view| view.record.id)
    };

    assert_eq!(active_on(date(2022, 12, 31)), None);
    assert_eq!(active_on(date(2023, 1, 1)), Some(bounded));
    assert_eq!(active_on(date(2023, 12, 31)), Some(bounded));
    assert_eq!(active_on(date(2024, 1, 1)), Some(open));
    assert_eq!(active_on(date(2999, 12, 31)), Some(open));

    let other_unit = repo
        .find_active_supplier_price(&ActivePriceQuery::new(
            catalogue.supplier.id,
            catalogue.material.id,
            "BAGS",
            date(2024, 6, 1),
        ))
        .unwrap();
    assert!(other_unit.is_none());
}

#[test]
fn test_find_active_ignores_inactive_records() {
    let test_db = common::TestDb::new("test_find_active_ignores_inactive_records.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let id = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));
    let stored = repo.get_supplier_price_by_id(id).unwrap().expect("stored");

    let deactivated = repo
        .deactivate_supplier_price(
            id,
            &PriceChange::deactivated(stored.snapshot(), "tester", now()),
        )
        .unwrap();
    assert!(!deactivated.record.is_active);
    assert_eq!(deactivated.record.effective_to_date, None);

    let active = repo
        .find_active_supplier_price(&ActivePriceQuery::new(
            catalogue.supplier.id,
            catalogue.material.id,
            "KG",
            date(2024, 2, 1),
        ))
        .unwrap();
    assert!(active.is_none());

    let revisions = repo.list_price_revisions(id).unwrap();
    assert_eq!(revisions.len(), 2);
    assert_eq!(
        revisions[0].revision.reason_for_change.as_deref(),
        Some(PRICE_DEACTIVATED_REASON)
    );
    assert_eq!(revisions[0].revision.old_is_active, Some(true));
    assert!(!revisions[0].revision.new_is_active);
}

#[test]
fn test_overlap_detection_and_guard() {
    let test_db = common::TestDb::new("test_overlap_detection_and_guard.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let first = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));

    let colliding = new_price(&catalogue, dec!(110), date(2024, 6, 1), None);
    let overlapping = repo
        .find_overlapping_supplier_prices(&colliding.overlap_query())
        .unwrap();
    assert_eq!(overlapping.len(), 1);
    assert_eq!(overlapping[0].id, first);

    let err = repo
        .create_supplier_price(&colliding, &PriceChange::initial("tester", now()))
        .expect_err("overlapping insert is rejected");
    assert!(matches!(err, RepositoryError::OverlappingPrice));
    assert_eq!(
        repo.list_supplier_prices(SupplierPriceListQuery::new())
            .unwrap()
            .len(),
        1
    );

    let excluded = repo
        .find_overlapping_supplier_prices(&OverlapQuery {
            exclude_id: Some(first),
            ..colliding.overlap_query()
        })
        .unwrap();
    assert!(excluded.is_empty());

    let mut other_unit = new_price(&catalogue, dec!(5), date(2024, 6, 1), None);
    other_unit.unit = "BAGS".to_string();
    create(&repo, &other_unit);
}

#[test]
fn test_update_price_logs_old_and_new_terms() {
    let test_db = common::TestDb::new("test_update_price_logs_old_and_new_terms.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let id = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));

    for (step, amount) in [dec!(101), dec!(102), dec!(103)].into_iter().enumerate() {
        let current = repo.get_supplier_price_by_id(id).unwrap().expect("stored");
        let updates = UpdateSupplierPrice {
            price: amount,
            unit: "KG".to_string(),
            effective_from_date: date(2024, 1, 1),
            effective_to_date: Some(date(2024, 5, 31)),
            is_active: None,
            updated_at: now(),
        };

        let updated = repo
            .update_supplier_price(
                id,
                &updates,
                &PriceChange::updated(current.snapshot(), format!("tester-{step}"), now()),
            )
            .unwrap();
        assert_eq!(updated.record.price, amount);
        assert!(updated.record.is_active);
    }

    let revisions = repo.list_price_revisions(id).unwrap();
    assert_eq!(revisions.len(), 4);
    assert_eq!(revisions[0].revision.new_price, dec!(103));
    assert_eq!(revisions[0].revision.old_price, Some(dec!(102)));
    assert_eq!(revisions[2].revision.old_effective_to_date, None);
    assert_eq!(revisions[2].revision.new_effective_to_date, Some(date(2024, 5, 31)));
    assert_eq!(revisions[3].revision.old_price, None);
    assert!(
        revisions
            .windows(2)
            .all(|pair| (pair[0].revision.change_timestamp, pair[0].revision.id)
                    > (pair[1].revision.change_timestamp, pair[1].revision.id))
    );

    let next = new_price(&catalogue, dec!(110), date(2024, 6, 1), None);
    create(&repo, &next);

    let err = repo
        .update_supplier_price(
            99_999,
            &UpdateSupplierPrice {
                price: dec!(1),
                unit: "KG".to_string(),
                effective_from_date: date(2024, 1, 1),
                effective_to_date: None,
                is_active: None,
                updated_at: now(),
            },
            &PriceChange::initial("tester", now()),
        )
        .expect_err("missing record");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_revision_log_is_append_only() {
    use bill_tracker::schema::price_revision_logs;

    let test_db = common::TestDb::new("test_revision_log_is_append_only.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);
    let id = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));

    let mut conn = test_db.pool().get().expect("connection");

    let updated = diesel::update(price_revision_logs::table)
        .set(price_revision_logs::changed_by_user.eq("someone else"))
        .execute(&mut conn);
    assert!(updated.is_err());

    let deleted = diesel::delete(price_revision_logs::table).execute(&mut conn);
    assert!(deleted.is_err());

    assert_eq!(repo.list_price_revisions(id).unwrap().len(), 1);
}

#[test]
fn test_price_views_embed_supplier_and_material() {
    let test_db = common::TestDb::new("test_price_views_embed_supplier_and_material.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let created = repo
        .create_supplier_price(
            &new_price(&catalogue, dec!(100), date(2024, 1, 1), None),
            &PriceChange::initial("tester", now()),
        )
        .unwrap();
    assert_eq!(created.supplier, catalogue.supplier);
    assert_eq!(created.master_material, catalogue.material);

    let view = repo
        .get_supplier_price_view(created.record.id)
        .unwrap()
        .expect("stored");
    assert_eq!(view, created);
    assert!(repo.get_supplier_price_view(99_999).unwrap().is_none());

    let listed = repo
        .list_supplier_prices(SupplierPriceListQuery::new().supplier(catalogue.supplier.id))
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].supplier.name, "Acme Building Supplies");
    assert_eq!(listed[0].master_material.name, "Portland Cement");

    let revisions = repo.list_price_revisions(created.record.id).unwrap();
    assert_eq!(revisions.len(), 1);
    assert_eq!(revisions[0].supplier_name, "Acme Building Supplies");
    assert_eq!(revisions[0].master_material_name, "Portland Cement");
}

#[test]
fn test_find_active_breaks_ties_by_created_at_then_id() {
    use bill_tracker::schema::supplier_material_prices;

    let test_db = common::TestDb::new("test_find_active_breaks_ties_by_created_at_then_id.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);
    let mut conn = test_db.pool().get().expect("connection");

    // The writers refuse overlapping windows, so the tied rows go in directly.
    let mut insert = |price: &str, from: NaiveDate, created_at: NaiveDateTime| -> i32 {
        diesel::insert_into(supplier_material_prices::table)
            .values((
                supplier_material_prices::supplier_id.eq(catalogue.supplier.id),
                supplier_material_prices::master_material_id.eq(catalogue.material.id),
                supplier_material_prices::price.eq(price),
                supplier_material_prices::unit.eq("KG"),
                supplier_material_prices::effective_from_date.eq(from),
                supplier_material_prices::is_active.eq(true),
                supplier_material_prices::created_at.eq(created_at),
                supplier_material_prices::updated_at.eq(created_at),
            ))
            .returning(supplier_material_prices::id)
            .get_result::<i32>(&mut conn)
            .expect("row inserted")
    };
    let at = |month: u32, day: u32| {
        date(2024, month, day)
            .and_hms_opt(8, 0, 0)
            .expect("valid timestamp")
    };

    insert("90.0000", date(2024, 1, 1), at(1, 1));
    let later_created = insert("95.0000", date(2024, 1, 1), at(2, 1));
    // An earlier start date loses even when created last.
    insert("80.0000", date(2023, 6, 1), at(3, 1));

    let query = ActivePriceQuery::new(
        catalogue.supplier.id,
        catalogue.material.id,
        "KG",
        date(2024, 3, 1),
    );

    let active = repo.find_active_supplier_price(&query).unwrap().expect("active");
    assert_eq!(active.record.id, later_created);
    assert_eq!(active.record.price, dec!(95));

    let same_instant = insert("97.0000", date(2024, 1, 1), at(2, 1));

    let active = repo.find_active_supplier_price(&query).unwrap().expect("active");
    assert_eq!(active.record.id, same_instant);
}

#[test]
fn test_deactivate_rechecks_active_flag_in_transaction() {
    let test_db = common::TestDb::new("test_deactivate_rechecks_active_flag_in_transaction.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let id = create(&repo, &new_price(&catalogue, dec!(100), date(2024, 1, 1), None));
    // Both callers read the record while it was still active.
    let snapshot = repo
        .get_supplier_price_by_id(id)
        .unwrap()
        .expect("stored")
        .snapshot();

    repo.deactivate_supplier_price(id, &PriceChange::deactivated(snapshot, "first", now()))
        .unwrap();

    let err = repo
        .deactivate_supplier_price(id, &PriceChange::deactivated(snapshot, "second", now()))
        .expect_err("record is already inactive");
    assert!(matches!(err, RepositoryError::AlreadyInactive));

    let revisions = repo.list_price_revisions(id).unwrap();
    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0].revision.changed_by_user, "first");

    let err = repo
        .deactivate_supplier_price(99_999, &PriceChange::deactivated(snapshot, "third", now()))
        .expect_err("missing record");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_brand_repository_and_material_brand_link() {
    let test_db = common::TestDb::new("test_brand_repository_and_material_brand_link.db");
    let repo = test_db.repo();
    let catalogue = common::seed_catalogue(&repo);

    let holcim = repo
        .create_brand(&NewBrand::new("Holcim").with_description("Cement maker"))
        .unwrap();
    repo.create_brand(&NewBrand::new("Tokyo Cement")).unwrap();

    let found = repo.get_brand_by_name("HOLCIM").unwrap();
    assert_eq!(found.map(|brand| brand.id), Some(holcim.id));

    let err = repo
        .create_brand(&NewBrand::new("holcim"))
        .expect_err("brand names are unique regardless of case");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let listed = repo.list_brands(BrandListQuery::new().search("tokyo")).unwrap();
    assert_eq!(listed.len(), 1);

    let with_logo = repo
        .update_brand_image(
            holcim.id,
            &UpdateBrandImage {
                brand_image_path: Some("/logos/holcim.png".to_string()),
                updated_at: now(),
            },
        )
        .unwrap();
    assert_eq!(with_logo.brand_image_path.as_deref(), Some("/logos/holcim.png"));
    assert_eq!(with_logo.description.as_deref(), Some("Cement maker"));

    let branded = repo
        .create_master_material(
            &NewMasterMaterial::new("White Cement", "BAGS", catalogue.category.id)
                .with_brand(holcim.id),
        )
        .unwrap();
    assert_eq!(branded.brand_id, Some(holcim.id));
    assert_eq!(catalogue.material.brand_id, None);

    let by_brand = repo
        .list_master_materials(MasterMaterialListQuery::new().brand(holcim.id))
        .unwrap();
    assert_eq!(by_brand.len(), 1);
    assert_eq!(by_brand[0].id, branded.id);

    let err = repo
        .delete_brand(holcim.id)
        .expect_err("brand is referenced by a material");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_site_repository_keeps_location_when_absent() {
    let test_db = common::TestDb::new("test_site_repository_keeps_location_when_absent.db");
    let repo = test_db.repo();

    let site = repo
        .create_site(&NewSite::new("Colombo Tower").with_location("Colombo 03"))
        .unwrap();

    let renamed = repo
        .update_site(
            site.id,
            &UpdateSite {
                name: "Colombo Tower A".to_string(),
                location: None,
                updated_at: now(),
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Colombo Tower A");
    assert_eq!(renamed.location.as_deref(), Some("Colombo 03"));

    assert_eq!(repo.list_sites().unwrap().len(), 1);
    assert!(repo.get_site_by_name("colombo tower a").unwrap().is_some());

    repo.delete_site(site.id).unwrap();
    assert!(repo.get_site_by_id(site.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_site(site.id),
        Err(RepositoryError::NotFound)
    ));
}
