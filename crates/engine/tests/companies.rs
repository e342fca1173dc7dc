use engine::{
    Amount, CompanyDeletePolicy, CompanyNewCmd, CompanyUpdateCmd, EngineError, ErrorKind,
    InvoiceNewCmd, generate_code,
};

use sea_orm::ConnectionTrait;

mod common;

use common::{engine, engine_with_db};

#[tokio::test]
async fn new_company_derives_code_from_name() {
    let engine = engine().await;

    let company = engine
        .new_company(CompanyNewCmd::new("Tesla", "Electric cars"))
        .await
        .unwrap();

    assert_eq!(company.code, "tsl");
    assert_eq!(company.code, generate_code("Tesla"));
    assert_eq!(company.name, "Tesla");
    assert_eq!(company.description, "Electric cars");
}

#[tokio::test]
async fn get_returns_supplied_fields_and_no_invoices() {
    let engine = engine().await;
    let created = engine
        .new_company(CompanyNewCmd::new("  Google Inc. ", "Search"))
        .await
        .unwrap();

    let detail = engine.company(&created.code).await.unwrap();
    assert_eq!(detail.company, created);
    assert_eq!(detail.company.code, "ggl-nc");
    assert_eq!(detail.company.name, "Google Inc.");
    assert!(detail.invoices.is_empty());
}

#[tokio::test]
async fn supplied_code_is_lowercased() {
    let engine = engine().await;
    let company = engine
        .new_company(CompanyNewCmd::new("Google", "Class A").code("GOOGL"))
        .await
        .unwrap();
    assert_eq!(company.code, "googl");

    let err = engine
        .new_company(CompanyNewCmd::new("Google", "Class A").code("goo gl"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn colliding_code_is_a_conflict() {
    let engine = engine().await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();

    let err = engine
        .new_company(CompanyNewCmd::new("Tesl", "Something else"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("tsl".to_string()));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // The first company is untouched.
    let detail = engine.company("tsl").await.unwrap();
    assert_eq!(detail.company.name, "Tesla");
}

#[tokio::test]
async fn unique_violation_from_insert_is_a_conflict() {
    let (engine, db) = engine_with_db(CompanyDeletePolicy::default()).await;
    // The existence check sees no "tsl" row, but the insert trips a unique key
    // through the trigger, as a concurrent writer would.
    for sql in [
        "CREATE TABLE taken_codes (code TEXT PRIMARY KEY NOT NULL)",
        "INSERT INTO taken_codes (code) VALUES ('tsl')",
        "CREATE TRIGGER companies_taken_code BEFORE INSERT ON companies \
         BEGIN INSERT INTO taken_codes (code) VALUES (NEW.code); END",
    ] {
        db.execute_unprepared(sql).await.unwrap();
    }

    let err = engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("tsl".to_string()));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(
        engine.company("tsl").await.unwrap_err(),
        EngineError::CompanyNotFound("tsl".to_string())
    );
}

#[tokio::test]
async fn missing_or_blank_fields_are_rejected() {
    let engine = engine().await;

    let err = engine
        .new_company(CompanyNewCmd {
            name: Some("Amazon".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::MissingKey("description".to_string()));
    assert_eq!(err.to_string(), "Missing Key.");

    let err = engine
        .new_company(CompanyNewCmd::new("   ", "Blank name"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::MissingKey("name".to_string()));

    assert!(engine.list_companies().await.unwrap().is_empty());
}

#[tokio::test]
async fn name_without_code_characters_is_rejected() {
    let engine = engine().await;
    let err = engine
        .new_company(CompanyNewCmd::new("Aeiou", "Only vowels"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidCode(_)));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn list_projects_code_and_name() {
    let engine = engine().await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();
    engine
        .new_company(CompanyNewCmd::new("Google", "Search").code("googl"))
        .await
        .unwrap();

    let companies = engine.list_companies().await.unwrap();
    let pairs: Vec<(&str, &str)> = companies
        .iter()
        .map(|c| (c.code.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(pairs, vec![("googl", "Google"), ("tsl", "Tesla")]);
}

#[tokio::test]
async fn update_replaces_fields_but_never_the_code() {
    let engine = engine().await;
    engine
        .new_company(CompanyNewCmd::new("Google", "Class A").code("googl"))
        .await
        .unwrap();

    let updated = engine
        .update_company("googl", CompanyUpdateCmd::new("Alphabet", "Class B"))
        .await
        .unwrap();
    assert_eq!(updated.code, "googl");
    assert_eq!(updated.name, "Alphabet");
    assert_eq!(updated.description, "Class B");

    let detail = engine.company("googl").await.unwrap();
    assert_eq!(detail.company, updated);
}

#[tokio::test]
async fn update_failures() {
    let engine = engine().await;
    engine
        .new_company(CompanyNewCmd::new("Google", "Class A").code("googl"))
        .await
        .unwrap();

    let err = engine
        .update_company(
            "googl",
            CompanyUpdateCmd {
                name: Some("Google".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::MissingKey("description".to_string()));

    let err = engine
        .update_company("nope", CompanyUpdateCmd::new("X", "Y"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::CompanyNotFound("nope".to_string()));
}

#[tokio::test]
async fn delete_missing_company_is_not_found() {
    let engine = engine().await;
    let err = engine.delete_company("tsla").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Company With Code tsla Can't Be Found.");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let engine = engine().await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();

    engine.delete_company("tsl").await.unwrap();

    let err = engine.company("tsl").await.unwrap_err();
    assert_eq!(err, EngineError::CompanyNotFound("tsl".to_string()));

    // The code is free again.
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars again"))
        .await
        .unwrap();
}

#[tokio::test]
async fn orphan_policy_keeps_invoices() {
    let (engine, _db) = engine_with_db(CompanyDeletePolicy::Orphan).await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();
    let invoice = engine
        .new_invoice(InvoiceNewCmd::new("tsl", Amount::new(770)))
        .await
        .unwrap();

    engine.delete_company("tsl").await.unwrap();

    let detail = engine.invoice(invoice.id).await.unwrap();
    assert_eq!(detail.id, invoice.id);
    assert_eq!(detail.amt, Amount::new(770));
    assert!(detail.company.is_none());
}

#[tokio::test]
async fn restrict_policy_blocks_delete() {
    let (engine, _db) = engine_with_db(CompanyDeletePolicy::Restrict).await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();
    let invoice = engine
        .new_invoice(InvoiceNewCmd::new("tsl", Amount::new(100)))
        .await
        .unwrap();

    let err = engine.delete_company("tsl").await.unwrap_err();
    assert_eq!(err, EngineError::CompanyInUse("tsl".to_string()));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(engine.company("tsl").await.is_ok());

    engine.delete_invoice(invoice.id).await.unwrap();
    engine.delete_company("tsl").await.unwrap();
}

#[tokio::test]
async fn restrict_policy_still_reports_missing_company() {
    let (engine, _db) = engine_with_db(CompanyDeletePolicy::Restrict).await;
    let err = engine.delete_company("ghost").await.unwrap_err();
    assert_eq!(err, EngineError::CompanyNotFound("ghost".to_string()));
}

#[tokio::test]
async fn cascade_policy_removes_invoices() {
    let (engine, _db) = engine_with_db(CompanyDeletePolicy::Cascade).await;
    engine
        .new_company(CompanyNewCmd::new("Tesla", "Cars"))
        .await
        .unwrap();
    engine
        .new_company(CompanyNewCmd::new("Google", "Search").code("googl"))
        .await
        .unwrap();
    let doomed = engine
        .new_invoice(InvoiceNewCmd::new("tsl", Amount::new(100)))
        .await
        .unwrap();
    let kept = engine
        .new_invoice(InvoiceNewCmd::new("googl", Amount::new(200)))
        .await
        .unwrap();

    engine.delete_company("tsl").await.unwrap();

    assert_eq!(
        engine.invoice(doomed.id).await.unwrap_err(),
        EngineError::InvoiceNotFound(doomed.id.to_string())
    );
    assert!(engine.invoice(kept.id).await.is_ok());
}
