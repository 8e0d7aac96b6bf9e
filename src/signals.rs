use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// `true` once Ctrl-C was pressed after `install_handler`.
pub fn received_ctrl_c() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
}
