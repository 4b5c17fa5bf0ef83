mod common;

#[cfg(test)]
mod tests {
    use super::common::{task, Call, Event, FakeBackend, Failure, Journal, RecordingSurface};
    use deptask::libs::app::MiniApp;
    use deptask::libs::host::{ConfiguredHost, NoHost};
    use deptask::libs::markup::MarkupSurface;
    use deptask::libs::modal::{ConfirmOutcome, SubmitOutcome};
    use deptask::libs::render::ListRegion;
    use deptask::libs::store::{DepartmentFilter, Screen};
    use deptask::libs::task::{NewTask, TaskStatus};
    use std::time::Duration;

    fn sales() -> DepartmentFilter {
        DepartmentFilter::Named("Sales".to_string())
    }

    fn app_as(name: &str, backend: FakeBackend) -> MiniApp<FakeBackend, MarkupSurface> {
        MiniApp::new(backend, MarkupSurface::new(), &ConfiguredHost::new(Some(name.to_string())))
    }

    #[tokio::test]
    async fn test_starts_on_departments_screen() {
        let app = MiniApp::new(FakeBackend::new(), MarkupSurface::new(), &NoHost);
        assert_eq!(app.store().current_view, Screen::Departments);
        assert_eq!(app.surface().screen, Screen::Departments);
        assert_eq!(app.user_name(), "Admin");
        // Nothing is loaded before a department is picked.
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_select_department_loads_filtered_list() {
        let backend = FakeBackend::with_tasks(vec![
            task(1, "Call client", "Sales", TaskStatus::Active),
            task(2, "Hire designer", "HR", TaskStatus::Active),
        ]);
        let mut app = app_as("Olga", backend);

        app.select_department(sales()).await;

        assert_eq!(app.store().current_view, Screen::Tasks);
        assert_eq!(app.surface().screen, Screen::Tasks);
        assert_eq!(app.surface().tasks_title, "Sales");
        assert_eq!(app.api().calls(), vec![Call::List(sales())]);
        assert_eq!(app.tasks().len(), 1);
        assert!(app.surface().list_html.contains("Call client"));
        assert!(!app.surface().list_html.contains("Hire designer"));
    }

    #[tokio::test]
    async fn test_back_keeps_department_filter() {
        let mut app = app_as("Olga", FakeBackend::new());
        app.select_department(sales()).await;

        app.show_departments();

        assert_eq!(app.store().current_view, Screen::Departments);
        assert_eq!(app.surface().screen, Screen::Departments);
        assert_eq!(app.store().current_department, sales());
    }

    #[tokio::test]
    async fn test_all_departments_title() {
        let mut app = app_as("Olga", FakeBackend::new());
        app.select_department(DepartmentFilter::All).await;
        assert_eq!(app.surface().tasks_title, "Все задачи");
        assert_eq!(app.api().calls(), vec![Call::List(DepartmentFilter::All)]);
    }

    #[tokio::test]
    async fn test_list_failure_shows_error_placeholder_and_alert() {
        let backend = FakeBackend::new();
        backend.fail_next(Failure::Parse);
        let mut app = app_as("Olga", backend);

        app.select_department(sales()).await;

        assert!(matches!(app.list(), ListRegion::Failed(_)));
        assert!(app.surface().list_html.contains("Ошибка загрузки"));
        assert_eq!(app.surface().alerts.len(), 1);
        assert!(app.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_title_department_and_author() {
        let mut app = app_as("Olga", FakeBackend::new());
        app.select_department(sales()).await;
        app.api().clear_calls();

        assert!(app.open_create_modal("Sales"));
        let outcome = app.submit_create("   Call client  ").await;

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(
            app.api().mutation_calls(),
            vec![Call::Create(NewTask::new("Call client", "Sales", "Olga"))]
        );
        assert!(!app.create_modal().is_open());
        assert!(app.surface().create_modal.is_none());
        assert_eq!(
            app.surface().last_alert(),
            Some("Задача «Call client» добавлена в отдел «Sales»")
        );
        assert_eq!(app.api().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_title_sends_nothing() {
        for input in ["", "   ", "\t\n"] {
            let mut app = app_as("Olga", FakeBackend::new());
            assert!(app.open_create_modal("Sales"));

            let outcome = app.submit_create(input).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert!(app.api().calls().is_empty());
            assert!(app.create_modal().is_open());
            let modal = app.surface().create_modal.clone().unwrap();
            assert!(modal.input_invalid);
            assert!(modal.input_focused);
        }
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_open() {
        let backend = FakeBackend::new();
        let mut app = app_as("Olga", backend);
        assert!(app.open_create_modal("Sales"));
        app.api().fail_next(Failure::Domain("Department is closed".to_string()));

        let outcome = app.submit_create("Call client").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(app.create_modal().is_open());
        assert!(app.surface().create_modal.is_some());
        assert!(app.surface().last_alert().unwrap().contains("Department is closed"));
        assert!(app.surface().submit_enabled);
        assert_eq!(app.api().list_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_department_refuses_create_modal() {
        let mut app = app_as("Olga", FakeBackend::new());
        assert!(!app.open_create_modal("  "));
        assert!(!app.create_modal().is_open());
        assert_eq!(app.surface().alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_open_modal_is_ignored() {
        let mut app = app_as("Olga", FakeBackend::new());
        assert_eq!(app.submit_create("Call client").await, SubmitOutcome::Ignored);
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirm_issues_one_delete_and_one_reload() {
        let backend = FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();

        assert!(app.open_delete_confirm(7, "Quarterly report"));
        assert_eq!(app.store().task_to_delete_id, Some(7));
        assert_eq!(app.surface().confirm_text.as_deref(), Some("Удалить задачу «Quarterly report»?"));

        let outcome = app.confirm().await;

        assert_eq!(outcome, ConfirmOutcome::Done);
        assert_eq!(app.api().calls(), vec![Call::Delete(7), Call::List(sales())]);
        assert_eq!(app.store().task_to_delete_id, None);
        assert!(app.surface().confirm_text.is_none());
        assert!(!app.confirm_dialog().is_open());
    }

    #[tokio::test]
    async fn test_cancel_issues_no_requests() {
        let backend = FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();

        assert!(app.open_delete_confirm(7, "Quarterly report"));
        app.cancel_confirm();
        assert!(app.open_complete_confirm(7));
        app.cancel_confirm();

        assert!(app.api().calls().is_empty());
        assert_eq!(app.store().task_to_delete_id, None);
        assert!(!app.confirm_dialog().is_open());
        assert_eq!(app.confirm().await, ConfirmOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_confirm_failure_still_closes_dialog() {
        let backend = FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();
        app.api().fail_next(Failure::Domain("Task is locked".to_string()));

        assert!(app.open_delete_confirm(7, "Quarterly report"));
        let outcome = app.confirm().await;

        assert_eq!(outcome, ConfirmOutcome::Failed);
        assert_eq!(app.api().calls(), vec![Call::Delete(7)]);
        assert!(!app.confirm_dialog().is_open());
        assert!(app.surface().confirm_text.is_none());
        assert_eq!(app.store().task_to_delete_id, None);
        assert!(app.surface().last_alert().unwrap().contains("Task is locked"));
    }

    #[tokio::test]
    async fn test_second_modal_is_refused_while_one_is_open() {
        let backend = FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);

        assert!(app.open_complete_confirm(7));
        assert!(!app.open_create_modal("Sales"));
        assert!(!app.open_delete_confirm(7, "Quarterly report"));
        assert_eq!(app.store().task_to_delete_id, None);

        app.cancel_confirm();
        assert!(app.open_create_modal("Sales"));
        assert!(!app.open_complete_confirm(7));
    }

    #[tokio::test]
    async fn test_department_to_empty_list_and_back() {
        let mut app = app_as("Olga", FakeBackend::new());

        // Select "Sales": nothing there yet.
        app.select_department(sales()).await;
        assert_eq!(app.list(), &ListRegion::Empty);
        assert!(app.surface().list_html.contains("Задач пока нет"));

        // Create "Call client".
        assert!(app.open_create_modal("Sales"));
        assert_eq!(app.submit_create("Call client").await, SubmitOutcome::Created);
        assert!(app.surface().last_alert().unwrap().contains("Sales"));
        let created = app.tasks()[0].clone();
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(created.title, "Call client");
        assert_eq!(created.author, "Olga");
        assert_eq!(created.status, TaskStatus::Active);
        assert!(app.surface().list_html.contains(&format!("confirmComplete({})", created.id)));

        // Complete it.
        assert!(app.open_complete_confirm(created.id));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);
        let done = app.tasks()[0].clone();
        assert_eq!(done.status, TaskStatus::Done);
        assert_eq!(done.last_modified_by.as_deref(), Some("Olga"));
        assert!(app.surface().list_html.contains("task-status done"));
        assert!(app.surface().list_html.contains("Выполнил: Olga"));
        assert!(!app.surface().list_html.contains("confirmComplete"));

        // Delete it.
        assert!(app.open_delete_confirm(done.id, &done.title));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);
        assert!(app.tasks().is_empty());
        assert!(app.surface().list_html.contains("Задач пока нет"));
    }

    #[tokio::test]
    async fn test_apostrophe_title_renders_and_deletes() {
        let mut app = app_as("Olga", FakeBackend::new());
        app.select_department(sales()).await;

        assert!(app.open_create_modal("Sales"));
        assert_eq!(app.submit_create("Tom's report").await, SubmitOutcome::Created);

        let created = app.tasks()[0].clone();
        let html = app.surface().list_html.clone();
        assert!(html.contains(&format!(
            "onclick=\"confirmDelete({}, &#39;Tom\\&#39;s report&#39;)\"",
            created.id
        )));
        assert!(html.contains(&format!("onclick=\"confirmComplete({})\"", created.id)));

        assert!(app.open_delete_confirm(created.id, &created.title));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);
        assert!(app.api().calls().contains(&Call::Delete(created.id)));
        assert!(app.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_complete_sends_current_user() {
        let backend = FakeBackend::with_tasks(vec![task(3, "Call client", "Sales", TaskStatus::Active)]);
        let mut app = MiniApp::new(backend, MarkupSurface::new(), &NoHost);
        app.select_department(sales()).await;

        assert!(app.open_complete_confirm(3));
        assert_eq!(app.surface().confirm_text.as_deref(), Some("Отметить задачу как выполненную?"));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);

        assert!(app.api().calls().contains(&Call::Complete(3, "Admin".to_string())));
    }

    fn submit_and_requests(journal: &Journal) -> Vec<Event> {
        journal
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::SubmitEnabled(_) | Event::Request(_)))
            .cloned()
            .collect()
    }

    #[tokio::test]
    async fn test_submit_control_disabled_while_create_is_outstanding() {
        let journal = Journal::default();
        let backend = FakeBackend::new().journaled(&journal);
        let mut app = MiniApp::new(backend, RecordingSurface::new(&journal), &NoHost);
        app.select_department(sales()).await;
        assert!(app.open_create_modal("Sales"));
        journal.borrow_mut().clear();

        assert_eq!(app.submit_create("Call client").await, SubmitOutcome::Created);

        assert_eq!(
            submit_and_requests(&journal),
            vec![
                Event::SubmitEnabled(false),
                Event::Request(Call::Create(NewTask::new("Call client", "Sales", "Admin"))),
                Event::SubmitEnabled(true),
                Event::Request(Call::List(sales())),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_control_disabled_while_confirm_is_outstanding() {
        let journal = Journal::default();
        let backend =
            FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]).journaled(&journal);
        let mut app = MiniApp::new(backend, RecordingSurface::new(&journal), &NoHost);
        app.select_department(sales()).await;
        assert!(app.open_delete_confirm(7, "Quarterly report"));
        journal.borrow_mut().clear();

        assert_eq!(app.confirm().await, ConfirmOutcome::Done);

        assert_eq!(
            submit_and_requests(&journal),
            vec![
                Event::SubmitEnabled(false),
                Event::Request(Call::Delete(7)),
                Event::SubmitEnabled(true),
                Event::Request(Call::List(sales())),
            ]
        );
        assert!(journal.borrow().contains(&Event::CloseConfirm));
    }

    #[tokio::test]
    async fn test_abandoned_create_can_be_closed() {
        let backend = FakeBackend::with_tasks(vec![task(1, "Call client", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        assert!(app.open_create_modal("Sales"));
        app.api().stall();

        let abandoned = tokio::time::timeout(Duration::from_millis(20), app.submit_create("Hire designer")).await;

        assert!(abandoned.is_err());
        assert!(app.create_modal().is_in_flight());
        assert!(!app.surface().submit_enabled);
        assert_eq!(app.submit_create("Hire designer").await, SubmitOutcome::Ignored);

        app.close_create_modal();
        app.api().resume();

        assert!(!app.create_modal().is_open());
        assert!(!app.create_modal().is_in_flight());
        assert!(app.surface().create_modal.is_none());
        assert!(app.surface().submit_enabled);
        assert!(app.open_complete_confirm(1));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);
    }

    #[tokio::test]
    async fn test_abandoned_confirm_can_be_cancelled() {
        let backend = FakeBackend::with_tasks(vec![task(7, "Quarterly report", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        assert!(app.open_delete_confirm(7, "Quarterly report"));
        app.api().stall();

        let abandoned = tokio::time::timeout(Duration::from_millis(20), app.confirm()).await;

        assert!(abandoned.is_err());
        assert!(app.confirm_dialog().is_in_flight());
        assert_eq!(app.confirm().await, ConfirmOutcome::Ignored);

        app.cancel_confirm();
        app.api().resume();

        assert!(!app.confirm_dialog().is_open());
        assert!(!app.confirm_dialog().is_in_flight());
        assert_eq!(app.store().task_to_delete_id, None);
        assert!(app.surface().submit_enabled);
        assert!(app.open_create_modal("Sales"));
    }

    #[tokio::test]
    async fn test_clear_done_deletes_each_done_task_then_reloads() {
        let backend = FakeBackend::with_tasks(vec![
            task(1, "Call client", "Sales", TaskStatus::Active),
            task(2, "Send invoice", "Sales", TaskStatus::Done),
            task(3, "Book hall", "Sales", TaskStatus::Done),
            task(4, "Hire designer", "HR", TaskStatus::Done),
        ]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();

        assert!(app.open_clear_done_confirm());
        assert_eq!(app.surface().confirm_text.as_deref(), Some("Удалить выполненные задачи (2)?"));
        assert_eq!(app.confirm().await, ConfirmOutcome::Done);

        assert_eq!(
            app.api().calls(),
            vec![Call::Delete(2), Call::Delete(3), Call::List(sales())]
        );
        assert_eq!(app.surface().last_alert(), Some("Удалено выполненных задач: 2"));
        assert_eq!(app.tasks().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[tokio::test]
    async fn test_clear_done_without_done_tasks_opens_nothing() {
        let backend = FakeBackend::with_tasks(vec![task(1, "Call client", "Sales", TaskStatus::Active)]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();

        assert!(!app.open_clear_done_confirm());

        assert!(!app.confirm_dialog().is_open());
        assert_eq!(app.surface().last_alert(), Some("Нет выполненных задач"));
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_clear_done_stops_at_first_failure() {
        let backend = FakeBackend::with_tasks(vec![
            task(2, "Send invoice", "Sales", TaskStatus::Done),
            task(3, "Book hall", "Sales", TaskStatus::Done),
        ]);
        let mut app = app_as("Olga", backend);
        app.select_department(sales()).await;
        app.api().clear_calls();
        app.api().fail_next(Failure::Domain("Task is locked".to_string()));

        assert!(app.open_clear_done_confirm());
        assert_eq!(app.confirm().await, ConfirmOutcome::Failed);

        assert_eq!(app.api().calls(), vec![Call::Delete(2)]);
        assert!(!app.confirm_dialog().is_open());
        assert!(app.surface().last_alert().unwrap().contains("Task is locked"));
    }
}
