use agenda::prelude::*;
use std::collections::HashSet;

fn controller() -> ContactController {
    ContactController::new(Box::new(MemStore::new()))
}

fn names(controller: &ContactController) -> Vec<String> {
    controller.list().iter().map(|c| c.name().to_string()).collect()
}

#[test]
fn add_returns_fresh_contact_and_grows_list_by_one() -> Result<(), AppError> {
    let mut controller = controller();
    let mut ids = HashSet::new();

    for (i, (name, email, phone)) in [
        ("Ana", "ana@x.com", "111"),
        ("Bo", "bo@x.com", ""),
        ("Ana", "ana@x.com", "111"),
        ("  Cy  ", "cy@x", "  "),
    ]
    .into_iter()
    .enumerate()
    {
        let before = controller.list();
        let contact = controller.add(name, email, phone)?;
        let after = controller.list();

        assert!(ids.insert(contact.id()), "id reused at step {i}");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&contact));
        assert_eq!(&after[..before.len()], &before[..]);
    }
    Ok(())
}

#[test]
fn empty_name_is_rejected_without_mutation() -> Result<(), AppError> {
    let mut controller = controller();
    controller.add("Ana", "ana@x.com", "111")?;
    let before = controller.list();

    for name in ["", "   "] {
        match controller.add(name, "bo@x.com", "222") {
            Err(AppError::Validation(err)) => assert_eq!(err.field, Field::Name),
            other => panic!("expected name validation error, got {other:?}"),
        }
    }

    assert_eq!(controller.list(), before);
    Ok(())
}

#[test]
fn empty_email_is_rejected_without_mutation() -> Result<(), AppError> {
    let mut controller = controller();
    controller.add("Ana", "ana@x.com", "111")?;
    let before = controller.list();

    match controller.add("Bo", "", "222") {
        Err(AppError::Validation(err)) => {
            assert_eq!(err.field, Field::Email);
            assert_eq!(err.field.as_str(), "email");
        }
        other => panic!("expected email validation error, got {other:?}"),
    }

    assert_eq!(controller.list(), before);
    Ok(())
}

#[test]
fn deleting_present_id_removes_exactly_that_contact() -> Result<(), AppError> {
    let mut controller = controller();
    let ana = controller.add("Ana", "ana@x.com", "111")?;
    let bo = controller.add("Bo", "bo@x.com", "222")?;

    assert!(controller.delete(ana.id())?);

    let after = controller.list();
    assert_eq!(after.len(), 1);
    assert!(after.iter().all(|c| c.id() != ana.id()));
    assert_eq!(after, vec![bo]);
    Ok(())
}

#[test]
fn deleting_absent_id_changes_nothing() -> Result<(), AppError> {
    let mut controller = controller();
    controller.add("Ana", "ana@x.com", "111")?;
    let before = controller.list();

    assert!(!controller.delete(ContactId::generate())?);
    assert_eq!(controller.list(), before);
    Ok(())
}

#[test]
fn delete_is_idempotent() -> Result<(), AppError> {
    let mut controller = controller();
    let ana = controller.add("Ana", "ana@x.com", "111")?;

    assert!(controller.delete(ana.id())?);
    assert!(!controller.delete(ana.id())?);
    Ok(())
}

#[test]
fn insertion_order_survives_deletes() -> Result<(), AppError> {
    let mut controller = controller();

    let a = controller.add("A", "a@x.com", "")?;
    controller.add("B", "b@x.com", "")?;
    controller.delete(a.id())?;
    controller.add("C", "c@x.com", "")?;

    assert_eq!(names(&controller), vec!["B", "C"]);
    Ok(())
}

#[test]
fn ana_and_bo_end_to_end() -> Result<(), AppError> {
    let mut controller = controller();
    assert!(controller.list().is_empty());

    let ana = controller.add("Ana", "ana@x.com", "111")?;
    let bo = controller.add("Bo", "bo@x.com", "222")?;
    assert_ne!(ana.id(), bo.id());
    assert_eq!(controller.list(), vec![ana.clone(), bo.clone()]);

    assert!(controller.delete(ana.id())?);
    assert_eq!(controller.list(), vec![bo]);
    Ok(())
}

#[test]
fn list_is_a_snapshot() -> Result<(), AppError> {
    let mut controller = controller();
    controller.add("Ana", "ana@x.com", "111")?;

    let snapshot = controller.list();
    controller.add("Bo", "bo@x.com", "222")?;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(controller.list().len(), 2);
    Ok(())
}

#[test]
fn json_backed_controller_keeps_the_same_contract() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("contacts.json");
    let config = Config::new("json", path.to_string_lossy())?;

    let mut controller = config.open_controller()?;
    let ana = controller.add("Ana", "ana@x.com", "111")?;
    let bo = controller.add("Bo", "bo@x.com", "222")?;
    assert!(controller.delete(ana.id())?);
    assert!(matches!(
        controller.add("", "x@x.com", ""),
        Err(AppError::Validation(_))
    ));

    let reopened = config.open_controller()?;
    assert_eq!(reopened.medium(), "json");
    assert_eq!(reopened.list(), vec![bo]);
    Ok(())
}
