pub mod app_shell;
pub mod backend_status;
pub mod input_form;
pub mod raw_json_view;
pub mod results_view;

pub use app_shell::AppShell;
pub use backend_status::BackendStatus;
pub use input_form::InputForm;
pub use raw_json_view::RawJsonView;
pub use results_view::ResultsView;
