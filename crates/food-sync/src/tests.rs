//! Dashboard Flow Tests
//!
//! Add, edit, delete and load flows against an in-memory collection.

#[cfg(test)]
mod tests {
    use crate::controller::{FormController, FormError, FormState, SubmitOutcome};
    use crate::domain::{FoodField, FoodForm, FoodItem};
    use crate::notify::{Operation, RecordingNotifier};
    use crate::remote::{CollectionOp, MemoryCollection};
    use crate::store::{Commit, EntityList};
    use crate::sync::{delete_entity, load_collection, toggle_availability, PendingSet};
    use crate::validation::{POSITIVE_PRICE_MESSAGE, REQUIRED_MESSAGE};

    fn food(id: i64, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            image: format!("https://img.example/{}.png", id),
            price: "19.90".to_string(),
            description: format!("{} description", name),
            available: true,
        }
    }

    fn form(name: &str, image: &str, price: &str, description: &str) -> FoodForm {
        FoodForm {
            name: name.into(),
            image: image.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    fn seeded() -> Vec<FoodItem> {
        vec![food(3, "Ao molho"), food(5, "Veggie"), food(7, "A la Camarón")]
    }

    fn ids(list: &EntityList<FoodItem>) -> Vec<i64> {
        list.iter().map(|f| f.id).collect()
    }

    fn committed(outcome: SubmitOutcome) -> Commit<FoodItem> {
        match outcome {
            SubmitOutcome::Committed(commit) => commit,
            other => panic!("expected a commit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_image_blocks_submit() {
        let collection = MemoryCollection::<FoodItem>::new();
        let notifier = RecordingNotifier::new();
        let list = EntityList::initialize(seeded());
        let mut controller = FormController::new();
        controller.open_add();

        let outcome = controller
            .submit(&collection, &form("Pizza", "", "10", "desc"), &notifier)
            .await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected field errors");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FoodField::Image), Some(REQUIRED_MESSAGE));
        assert_eq!(controller.errors(), &errors);
        assert_eq!(controller.state(), FormState::Idle);
        assert!(controller.is_open());
        assert!(collection.calls().is_empty());
        assert_eq!(list, EntityList::initialize(seeded()));
    }

    #[tokio::test]
    async fn test_negative_price_blocks_submit() {
        let collection = MemoryCollection::<FoodItem>::new();
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_add();

        let outcome = controller
            .submit(&collection, &form("Pizza", "url", "-5", "desc"), &notifier)
            .await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected field errors");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FoodField::Price), Some(POSITIVE_PRICE_MESSAGE));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_server_entity() {
        let collection = MemoryCollection::with_entities(seeded()).with_assigned_ids([42]);
        let notifier = RecordingNotifier::new();
        let list = EntityList::initialize(seeded());
        let mut controller = FormController::new().with_id_source(|| 1_700_000_000_000);
        controller.open_add();

        let outcome = controller
            .submit(&collection, &form("Pizza", "url", "10", "desc"), &notifier)
            .await;
        let list = committed(outcome).apply(&list);

        assert_eq!(ids(&list), vec![3, 5, 7, 42]);
        let added = list.get(42).expect("new dish in list");
        assert_eq!(added.name, "Pizza");
        assert!(added.available);
        assert_eq!(controller.state(), FormState::Success);
        assert!(!controller.is_open());
    }

    #[tokio::test]
    async fn test_add_sends_provisional_id() {
        let collection = MemoryCollection::<FoodItem>::new();
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new().with_id_source(|| 1_700_000_000_000);
        controller.open_add();

        let outcome = controller
            .submit(&collection, &form("Pizza", "url", "10", "desc"), &notifier)
            .await;

        assert_eq!(
            committed(outcome),
            Commit::Append(collection.snapshot()[0].clone())
        );
        assert_eq!(collection.snapshot()[0].id, 1_700_000_000_000);
    }

    #[tokio::test]
    async fn test_add_failure_alerts_and_keeps_modal_open() {
        let collection = MemoryCollection::<FoodItem>::new();
        collection.fail(CollectionOp::Create);
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_add();

        let outcome = controller
            .submit(&collection, &form("Pizza", "url", "10", "desc"), &notifier)
            .await;

        let SubmitOutcome::Failed(error) = outcome else {
            panic!("expected a transport failure");
        };
        assert_eq!(error.operation, Operation::Add);
        assert_eq!(notifier.messages(), vec![Operation::Add.alert_message().to_string()]);
        assert_eq!(controller.state(), FormState::SubmitFailed);
        assert!(controller.is_open());
        assert!(controller.errors().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let collection = MemoryCollection::<FoodItem>::new();
        collection.fail(CollectionOp::Create);
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_add();
        let input = form("Pizza", "url", "10", "desc");

        let _ = controller.submit(&collection, &input, &notifier).await;
        collection.recover(CollectionOp::Create);
        let outcome = controller.submit(&collection, &input, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Committed(Commit::Append(_))));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_replaces_in_place() {
        let collection = MemoryCollection::with_entities(seeded());
        let notifier = RecordingNotifier::new();
        let list = EntityList::initialize(seeded());
        let mut controller = FormController::new();
        let editing = list.get(5).cloned().expect("seeded dish");
        controller.open_edit(editing);

        let mut input = controller.initial_form();
        assert_eq!(input.name, "Veggie");
        input.set(FoodField::Name, "Veggie Deluxe".into());
        input.set(FoodField::Price, "25.50".into());

        let outcome = controller.submit(&collection, &input, &notifier).await;
        let updated = committed(outcome).apply(&list);

        assert_eq!(updated.len(), list.len());
        assert_eq!(ids(&updated), vec![3, 5, 7]);
        let edited = updated.get(5).expect("edited dish");
        assert_eq!(edited.name, "Veggie Deluxe");
        assert_eq!(edited.price, "25.50");
        assert_eq!(updated.get(3), list.get(3));
        assert_eq!(updated.get(7), list.get(7));
        assert!(controller.editing().is_none());
    }

    #[tokio::test]
    async fn test_edit_failure_leaves_list_alone() {
        let collection = MemoryCollection::with_entities(seeded());
        collection.fail(CollectionOp::Update);
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_edit(food(5, "Veggie"));

        let outcome = controller
            .submit(&collection, &form("X", "url", "1", "desc"), &notifier)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(notifier.messages(), vec![Operation::Update.alert_message().to_string()]);
        assert_eq!(controller.editing().map(|f| f.id), Some(5));
    }

    #[tokio::test]
    async fn test_response_after_close_is_not_committed() {
        let collection = MemoryCollection::<FoodItem>::new();
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_add();

        let submission = controller
            .prepare(&form("Pizza", "url", "10", "desc"))
            .expect("valid form");
        controller.close();
        let result = submission.send(&collection).await;

        assert_eq!(controller.complete(&submission, result, &notifier), SubmitOutcome::Stale);
    }

    #[tokio::test]
    async fn test_response_for_previous_session_is_stale() {
        let collection = MemoryCollection::<FoodItem>::new();
        let notifier = RecordingNotifier::new();
        let mut controller = FormController::new();
        controller.open_add();
        let submission = controller
            .prepare(&form("Pizza", "url", "10", "desc"))
            .expect("valid form");

        controller.close();
        controller.open_edit(food(5, "Veggie"));
        let result = submission.send(&collection).await;

        assert_eq!(controller.complete(&submission, result, &notifier), SubmitOutcome::Stale);
        assert!(controller.is_open());
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[test]
    fn test_second_prepare_while_submitting_is_rejected() {
        let mut controller = FormController::new();
        controller.open_add();
        let input = form("Pizza", "url", "10", "desc");

        assert!(controller.prepare(&input).is_ok());
        assert_eq!(controller.state(), FormState::Submitting);
        assert_eq!(controller.prepare(&input), Err(FormError::InFlight));
    }

    #[test]
    fn test_prepare_without_session() {
        let mut controller = FormController::new();
        assert_eq!(
            controller.prepare(&form("Pizza", "url", "10", "desc")),
            Err(FormError::NoSession)
        );
    }

    #[test]
    fn test_reopening_clears_errors() {
        let mut controller = FormController::new();
        controller.open_add();
        let _ = controller.prepare(&FoodForm::default());
        assert_eq!(controller.errors().len(), 4);

        controller.open_add();
        assert!(controller.errors().is_empty());
        assert_eq!(controller.initial_form(), FoodForm::default());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_entity() {
        let collection = MemoryCollection::with_entities(seeded());
        collection.fail(CollectionOp::Delete);
        let notifier = RecordingNotifier::new();
        let list = EntityList::initialize(seeded());

        let result = delete_entity::<FoodItem, _>(&collection, 7).await;

        let error = result.expect_err("delete should fail");
        error.report(&notifier);
        assert_eq!(error.operation, Operation::Delete);
        assert!(list.contains(7));
        assert_eq!(notifier.messages(), vec!["Não foi possível remover o prato".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_compose() {
        let collection = MemoryCollection::with_entities(seeded());
        let mut pending = PendingSet::new();
        let list = EntityList::initialize(seeded());

        assert!(pending.begin(3));
        assert!(pending.begin(7));
        assert!(!pending.begin(7));

        let (first, second) = tokio::join!(
            delete_entity::<FoodItem, _>(&collection, 3),
            delete_entity::<FoodItem, _>(&collection, 7),
        );
        let list = second.unwrap().apply(&first.unwrap().apply(&list));
        pending.finish(3);
        pending.finish(7);

        assert_eq!(ids(&list), vec![5]);
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_load_resets_list() {
        let collection = MemoryCollection::with_entities(seeded());

        let list = load_collection::<FoodItem, _>(&collection)
            .await
            .expect("load")
            .apply(&EntityList::new());

        assert_eq!(ids(&list), vec![3, 5, 7]);
    }

    #[tokio::test]
    async fn test_load_failure_message() {
        let collection = MemoryCollection::<FoodItem>::new();
        collection.fail(CollectionOp::List);
        let notifier = RecordingNotifier::new();

        let error = load_collection::<FoodItem, _>(&collection)
            .await
            .expect_err("load should fail");
        error.report(&notifier);

        assert_eq!(
            notifier.messages(),
            vec!["Não foi possível carregar as informações. Verifique a conexão".to_string()]
        );
    }

    #[tokio::test]
    async fn test_toggle_availability() {
        let collection = MemoryCollection::with_entities(seeded());
        let list = EntityList::initialize(seeded());
        let dish = list.get(5).cloned().expect("seeded dish");

        let list = toggle_availability(&collection, &dish)
            .await
            .expect("toggle")
            .apply(&list);

        assert_eq!(list.get(5).map(|f| f.available), Some(false));
        assert_eq!(ids(&list), vec![3, 5, 7]);
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_confirmed_availability() {
        let collection = MemoryCollection::with_entities(seeded());
        collection.fail(CollectionOp::Update);
        let notifier = RecordingNotifier::new();
        let list = EntityList::initialize(seeded());
        let dish = list.get(5).cloned().expect("seeded dish");

        let error = toggle_availability(&collection, &dish)
            .await
            .expect_err("toggle should fail");
        error.report(&notifier);

        assert_eq!(error.operation, Operation::ToggleAvailability);
        assert_eq!(
            notifier.messages(),
            vec![Operation::ToggleAvailability.alert_message().to_string()]
        );
        assert_eq!(list.get(5).map(|f| f.available), Some(true));
        assert!(collection.snapshot()[1].available);
    }
}
