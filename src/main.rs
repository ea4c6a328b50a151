use taskpad::core::logging::init_logging;
use taskpad::core::settings::{load_settings, resolve_tasks_path};
use taskpad::tasks::init_task_store;
use taskpad::ui;

fn main() {
    let _logging_guards = init_logging();

    let settings = load_settings();
    let tasks_path = resolve_tasks_path(&settings);

    let mut store = match init_task_store(tasks_path.clone()) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(target: "system", "Could not open task list: {}", err);
            eprintln!("Could not open task list at {:?}: {}", tasks_path, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = ui::run(&mut store) {
        tracing::error!(target: "system", "Terminal I/O failed: {}", err);
        eprintln!("Terminal I/O failed: {}", err);
        std::process::exit(1);
    }
}
