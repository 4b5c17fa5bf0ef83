//! Display implementation for deptask messages.
//!
//! All user-facing text of the mini-app lives here, so the markup renderer
//! and the terminal surface show exactly the same wording.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK LIST MESSAGES ===
            Message::ListLoading => "Загрузка...".to_string(),
            Message::ListEmpty => "Задач пока нет".to_string(),
            Message::ListFailed(error) => format!("Ошибка загрузки: {}", error),
            Message::AllTasksTitle => "Все задачи".to_string(),
            Message::StatusActive => "Активна".to_string(),
            Message::StatusDone => "Выполнена".to_string(),
            Message::AuthorLine(author) => format!("Автор: {}", author),
            Message::CompletedByLine(name) => format!("Выполнил: {}", name),
            Message::ActionComplete => "Выполнить".to_string(),
            Message::ActionDelete => "Удалить".to_string(),

            // === MODAL MESSAGES ===
            Message::TaskCreated { title, department } => {
                format!("Задача «{}» добавлена в отдел «{}»", title, department)
            }
            Message::TitleRequired => "Введите название задачи".to_string(),
            Message::SelectDepartmentFirst => "Выберите отдел, чтобы добавить задачу".to_string(),
            Message::ConfirmComplete => "Отметить задачу как выполненную?".to_string(),
            Message::ConfirmDelete(title) => format!("Удалить задачу «{}»?", title),
            Message::ConfirmClearDone(count) => format!("Удалить выполненные задачи ({})?", count),
            Message::DoneCleared(count) => format!("Удалено выполненных задач: {}", count),
            Message::RequestFailed(error) => format!("Ошибка: {}", error),

            // === TERMINAL SESSION MESSAGES ===
            Message::SelectDepartment => "Выберите отдел".to_string(),
            Message::SelectTaskAction => "Действие".to_string(),
            Message::SelectTask => "Выберите задачу".to_string(),
            Message::MenuAllTasks => "Все задачи".to_string(),
            Message::MenuExit => "Выход".to_string(),
            Message::MenuNewTask => "Новая задача".to_string(),
            Message::MenuCompleteTask => "Отметить выполненной".to_string(),
            Message::MenuDeleteTask => "Удалить задачу".to_string(),
            Message::MenuRefresh => "Обновить".to_string(),
            Message::MenuBack => "Назад к отделам".to_string(),
            Message::PromptTaskTitle => "Название задачи".to_string(),
            Message::RetryCreate => "Попробовать ещё раз?".to_string(),
            Message::NoActiveTasks => "Нет активных задач".to_string(),
            Message::NoTasks => "Нет задач".to_string(),
            Message::OperationCancelled => "Отменено".to_string(),
            Message::TasksHeader(title) => format!("Задачи: {}", title),
            Message::DoneTasksHeader(title) => format!("Выполненные задачи: {}", title),
            Message::MenuClearDone => "Удалить выполненные".to_string(),
            Message::NoDoneTasks => "Нет выполненных задач".to_string(),

            // === COMMAND RESULTS ===
            Message::TaskNotCreated => "Задача не добавлена".to_string(),
            Message::ActionNotDone => "Действие не выполнено".to_string(),
            Message::ListNotLoaded => "Список задач не загружен".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Настройки сохранены".to_string(),
            Message::PromptDepartments => "Отделы (через запятую)".to_string(),
            Message::PromptFirstName => "Ваше имя (пусто - Admin)".to_string(),
            Message::DepartmentsRequired => "Нужен хотя бы один отдел".to_string(),
        };
        write!(f, "{}", text)
    }
}
