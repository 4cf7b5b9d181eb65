mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod scan_modal;
pub use scan_modal::ScanModal;

mod dashboard;
pub use dashboard::DashboardView;
