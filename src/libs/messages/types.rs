#[derive(Debug, Clone)]
pub enum Message {
    // === TASK LIST MESSAGES ===
    ListLoading,
    ListEmpty,
    ListFailed(String), // error message
    AllTasksTitle,
    StatusActive,
    StatusDone,
    AuthorLine(String),      // author
    CompletedByLine(String), // completer
    ActionComplete,
    ActionDelete,

    // === MODAL MESSAGES ===
    TaskCreated {
        title: String,
        department: String,
    },
    TitleRequired,
    SelectDepartmentFirst,
    ConfirmComplete,
    ConfirmDelete(String), // title
    ConfirmClearDone(usize), // number of done tasks
    DoneCleared(usize),      // number of deleted tasks
    RequestFailed(String),   // error message

    // === TERMINAL SESSION MESSAGES ===
    SelectDepartment,
    SelectTaskAction,
    SelectTask,
    MenuAllTasks,
    MenuExit,
    MenuNewTask,
    MenuCompleteTask,
    MenuDeleteTask,
    MenuRefresh,
    MenuBack,
    PromptTaskTitle,
    RetryCreate,
    NoActiveTasks,
    NoTasks,
    OperationCancelled,
    TasksHeader(String), // department title
    DoneTasksHeader(String), // department title
    MenuClearDone,
    NoDoneTasks,

    // === COMMAND RESULTS ===
    TaskNotCreated,
    ActionNotDone,
    ListNotLoaded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDepartments,
    PromptFirstName,
    DepartmentsRequired,
}
