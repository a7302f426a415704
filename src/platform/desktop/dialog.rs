use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub fn show_load_failure(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Gagal memuat data")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
