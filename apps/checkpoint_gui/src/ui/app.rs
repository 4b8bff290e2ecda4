//! App shell for the checkpoint dashboard: header with check-in/out actions
//! and aggregate stats, roster list and profile tabs, the ID dialog, and
//! toast rendering. State mutation happens here; network work happens on
//! the backend worker.

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use eframe::egui;

use client_core::{mock, roster, Employee, MockRoster};
use shared::{
    domain::{EmployeeId, EmployeeStatus, EventType},
    protocol::{MovementKind, MovementRecord},
};

use crate::backend_bridge::BackendCommand;
use crate::controller::events::{err_label, UiErrorCategory, UiEvent};
use crate::ui::toast::{Toast, ToastSeverity};

/// Resolved settings the app shell needs at construction.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint_url: String,
    pub mock: bool,
}

/// Where roster data comes from: the seeded first-revision roster mutated
/// locally, or snapshots pushed by the backend worker.
enum DataMode {
    Mock(MockRoster),
    Live {
        roster: Vec<Employee>,
        movements: HashMap<EmployeeId, Vec<MovementRecord>>,
        connected: bool,
    },
}

impl DataMode {
    fn is_mock(&self) -> bool {
        matches!(self, Self::Mock(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    List,
    Profile,
}

struct CheckDialog {
    open: bool,
    action: EventType,
    input_id: String,
    request_focus: bool,
}

impl Default for CheckDialog {
    fn default() -> Self {
        Self {
            open: false,
            action: EventType::Entry,
            input_id: String::new(),
            request_focus: false,
        }
    }
}

pub struct CheckpointApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    mode: DataMode,
    selected: Option<EmployeeId>,
    tab: DashboardTab,
    dialog: CheckDialog,
    toasts: Vec<Toast>,
    admin_view: bool,

    endpoint_label: String,
    status: String,

    // Frame counter used for toast expiry.
    tick: u64,
}

fn queue_command(cmd_tx: &Sender<BackendCommand>, command: BackendCommand, status: &mut String) {
    match cmd_tx.try_send(command) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            *status = "Backend is busy; command dropped".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker unavailable".to_string();
        }
    }
}

impl CheckpointApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mode = if startup.mock {
            DataMode::Mock(MockRoster::seeded())
        } else {
            DataMode::Live {
                roster: Vec::new(),
                movements: HashMap::new(),
                connected: false,
            }
        };
        let mut app = Self {
            cmd_tx,
            ui_rx,
            mode,
            selected: None,
            tab: DashboardTab::List,
            dialog: CheckDialog::default(),
            toasts: Vec::new(),
            admin_view: false,
            endpoint_label: startup.endpoint_url.clone(),
            status: if startup.mock {
                "Mock roster (no backend)".to_string()
            } else {
                "Connecting...".to_string()
            },
            tick: 0,
        };
        if !startup.mock {
            queue_command(
                &app.cmd_tx,
                BackendCommand::Connect {
                    endpoint_url: startup.endpoint_url,
                },
                &mut app.status,
            );
        }
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Connected { endpoint } => {
                    if let DataMode::Live { connected, .. } = &mut self.mode {
                        *connected = true;
                    }
                    self.status = format!("Connected to {endpoint}");
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::RosterRefreshed(records) => {
                    if let DataMode::Live { roster, .. } = &mut self.mode {
                        *roster = records.into_iter().map(Employee::from).collect();
                        if let Some(selected) = self.selected {
                            if !roster.iter().any(|employee| employee.id == selected) {
                                self.selected = None;
                            }
                        }
                    }
                }
                UiEvent::EventRecorded {
                    event_type,
                    employee_name,
                    is_late,
                } => {
                    let mut message = match event_type {
                        EventType::Entry => format!("Arrival recorded for {employee_name}"),
                        EventType::Exit => format!("Departure recorded for {employee_name}"),
                    };
                    if is_late {
                        message.push_str(" (late arrival)");
                    }
                    self.status = message.clone();
                    self.toasts
                        .push(Toast::new(ToastSeverity::Success, message, self.tick));
                }
                UiEvent::MovementsLoaded {
                    employee_id,
                    movements,
                } => {
                    if let DataMode::Live {
                        movements: cache, ..
                    } = &mut self.mode
                    {
                        cache.insert(employee_id, movements);
                    }
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "worker error: {}", err.message());
                    // Server denials read fine on their own; other failures
                    // get a category prefix.
                    let message = if err.category() == UiErrorCategory::Denied {
                        err.message().to_string()
                    } else {
                        format!("{} error: {}", err_label(err.category()), err.message())
                    };
                    self.status = message.clone();
                    self.toasts
                        .push(Toast::new(ToastSeverity::Error, message, self.tick));
                }
            }
        }
    }

    fn roster_view(&self) -> &[Employee] {
        match &self.mode {
            DataMode::Mock(roster) => roster.employees(),
            DataMode::Live { roster, .. } => roster,
        }
    }

    fn selected_employee(&self) -> Option<&Employee> {
        let selected = self.selected?;
        self.roster_view()
            .iter()
            .find(|employee| employee.id == selected)
    }

    fn on_site_count(&self) -> usize {
        roster::active_count(self.roster_view())
    }

    fn hours_today_total(&self) -> f32 {
        roster::total_hours(self.roster_view())
    }

    fn select_employee(&mut self, id: EmployeeId) {
        self.selected = Some(id);
        if let DataMode::Live { movements, .. } = &self.mode {
            if !movements.contains_key(&id) {
                queue_command(
                    &self.cmd_tx,
                    BackendCommand::FetchMovements { employee_id: id },
                    &mut self.status,
                );
            }
        }
    }

    /// Glyph for the admin-view toggle. Swapping it is the toggle's only
    /// observable effect.
    fn admin_icon(&self) -> &'static str {
        if self.admin_view {
            "👥"
        } else {
            "⚙"
        }
    }

    fn push_toast(&mut self, severity: ToastSeverity, message: impl Into<String>) {
        self.toasts.push(Toast::new(severity, message, self.tick));
    }

    fn open_check_dialog(&mut self, action: EventType) {
        self.dialog.action = action;
        self.dialog.input_id.clear();
        self.dialog.open = true;
        self.dialog.request_focus = true;
    }

    fn close_check_dialog(&mut self) {
        self.dialog.open = false;
        self.dialog.input_id.clear();
    }

    fn submit_check_dialog(&mut self) {
        let Ok(id) = self.dialog.input_id.trim().parse::<i64>() else {
            self.push_toast(ToastSeverity::Error, "Enter a numeric employee ID");
            return;
        };
        let employee_id = EmployeeId(id);
        let action = self.dialog.action;

        enum Outcome {
            Recorded { name: String, stamp: String },
            Miss,
            Queued,
        }

        let outcome = match &mut self.mode {
            DataMode::Mock(roster) => {
                let stamp = mock::wall_clock_stamp();
                let result = match action {
                    EventType::Entry => roster.check_in_at(employee_id, &stamp),
                    EventType::Exit => roster.check_out_at(employee_id, &stamp),
                };
                match result {
                    Ok(employee) => Outcome::Recorded {
                        name: employee.name.clone(),
                        stamp,
                    },
                    Err(_) => Outcome::Miss,
                }
            }
            DataMode::Live { .. } => {
                queue_command(
                    &self.cmd_tx,
                    BackendCommand::RecordEvent {
                        employee_id,
                        event_type: action,
                    },
                    &mut self.status,
                );
                Outcome::Queued
            }
        };

        match outcome {
            Outcome::Recorded { name, stamp } => {
                let message = match action {
                    EventType::Entry => format!("Arrival recorded: {name} at {stamp}"),
                    EventType::Exit => format!("Departure recorded: {name} at {stamp}"),
                };
                self.push_toast(ToastSeverity::Success, message);
                self.close_check_dialog();
            }
            // The dialog stays open so the worker can correct the ID.
            Outcome::Miss => self.push_toast(ToastSeverity::Error, "No employee with that ID"),
            Outcome::Queued => {
                self.status = format!("Submitting {} event...", action.as_str());
                self.close_check_dialog();
            }
        }
    }

    // ------------------------- rendering -------------------------

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Site Checkpoint");
                ui.weak("Employee attendance control");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new(self.admin_icon()).size(18.0))
                    .on_hover_text("Toggle admin view")
                    .clicked()
                {
                    self.admin_view = !self.admin_view;
                }
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let check_in = egui::Button::new(egui::RichText::new("Check in").strong())
                .min_size(egui::vec2(140.0, 36.0));
            if ui.add(check_in).clicked() {
                self.open_check_dialog(EventType::Entry);
            }
            let check_out = egui::Button::new(egui::RichText::new("Check out").strong())
                .min_size(egui::vec2(140.0, 36.0));
            if ui.add(check_out).clicked() {
                self.open_check_dialog(EventType::Exit);
            }
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            stat_card(ui, "On site", self.on_site_count().to_string());
            stat_card(ui, "Hours today", format!("{:.1}", self.hours_today_total()));
        });
        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.status).weak());
            if let DataMode::Live { connected, .. } = &self.mode {
                let connected = *connected;
                ui.small(egui::RichText::new(format!("· {}", self.endpoint_label)).weak());
                if !connected {
                    ui.small(egui::RichText::new("(connecting)").weak());
                }
                if ui.small_button("⟳ Refresh").clicked() {
                    queue_command(
                        &self.cmd_tx,
                        BackendCommand::RefreshRoster,
                        &mut self.status,
                    );
                }
            }
        });
        ui.add_space(4.0);
    }

    fn show_roster_list(&mut self, ui: &mut egui::Ui) {
        let employees = self.roster_view().to_vec();
        if employees.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.weak("No roster data yet");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for employee in &employees {
                    let selected = self.selected == Some(employee.id);
                    let response = ui
                        .push_id(employee.id.0, |ui| {
                            egui::Frame::group(ui.style())
                                .fill(if selected {
                                    ui.visuals().faint_bg_color
                                } else {
                                    ui.visuals().panel_fill
                                })
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    employee_card(ui, employee);
                                })
                                .response
                        })
                        .inner
                        .interact(egui::Sense::click());
                    if response.clicked() {
                        self.select_employee(employee.id);
                    }
                    ui.add_space(4.0);
                }
            });
    }

    fn show_profile(&mut self, ui: &mut egui::Ui) {
        let Some(employee) = self.selected_employee().cloned() else {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("👤").size(48.0));
                ui.weak("Select an employee from the list");
            });
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, &initials(&employee.name), 56.0);
                ui.vertical(|ui| {
                    ui.heading(&employee.name);
                    ui.weak(&employee.position);
                });
            });
        });
        ui.add_space(8.0);

        ui.strong("Contact");
        ui.label(&employee.phone);
        ui.add_space(8.0);

        ui.strong("Today");
        ui.horizontal(|ui| {
            stat_card(ui, "Hours on site", format!("{:.1}", employee.hours_today));
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical(|ui| {
                    status_badge(ui, employee.status);
                    ui.small("Status");
                });
            });
        });
        ui.add_space(8.0);

        if employee.check_in_time.is_some() || employee.check_out_time.is_some() {
            ui.strong("Recorded times");
            if let Some(time) = &employee.check_in_time {
                ui.horizontal(|ui| {
                    ui.small("Arrival");
                    ui.label(egui::RichText::new(time).strong());
                });
            }
            if let Some(time) = &employee.check_out_time {
                ui.horizontal(|ui| {
                    ui.small("Departure");
                    ui.label(egui::RichText::new(time).strong());
                });
            }
            ui.add_space(8.0);
        }

        if let DataMode::Live { movements, .. } = &self.mode {
            ui.strong("Recent activity");
            match movements.get(&employee.id) {
                Some(rows) if !rows.is_empty() => {
                    for row in rows {
                        movement_row(ui, row);
                    }
                }
                Some(_) => {
                    ui.weak("No recorded movements");
                }
                None => {
                    ui.weak("Loading movement log...");
                }
            }
        }
    }

    fn show_check_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialog.open {
            return;
        }

        let title = match self.dialog.action {
            EventType::Entry => "Record arrival",
            EventType::Exit => "Record departure",
        };
        let mut keep_open = true;
        egui::Window::new(title)
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter your employee ID to identify yourself");
                ui.add_space(6.0);

                let edit = egui::TextEdit::singleline(&mut self.dialog.input_id)
                    .id_salt("check_dialog_employee_id")
                    .hint_text("Employee ID (e.g. 1234)")
                    .desired_width(f32::INFINITY);
                let response = ui.add_sized([ui.available_width().max(260.0), 34.0], edit);
                if self.dialog.request_focus {
                    response.request_focus();
                    self.dialog.request_focus = false;
                }
                if self.mode.is_mock() {
                    ui.small("Seeded IDs: 1, 2, 3, 4");
                }

                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let submit_via_enter = response.lost_focus() && enter_pressed;

                ui.add_space(6.0);
                let mut cancel = false;
                let mut confirm = submit_via_enter;
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if ui
                        .button(egui::RichText::new("Confirm").strong())
                        .clicked()
                    {
                        confirm = true;
                    }
                });

                if cancel {
                    self.close_check_dialog();
                } else if confirm {
                    self.submit_check_dialog();
                }
            });
        if !keep_open {
            self.close_check_dialog();
        }
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.iter().enumerate() {
                    let (fill, stroke) = match toast.severity {
                        ToastSeverity::Error => (
                            egui::Color32::from_rgb(111, 53, 53),
                            egui::Color32::from_rgb(175, 96, 96),
                        ),
                        ToastSeverity::Success => (
                            egui::Color32::from_rgb(49, 97, 62),
                            egui::Color32::from_rgb(96, 175, 120),
                        ),
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.message)
                                        .color(egui::Color32::WHITE),
                                );
                                if ui.small_button("✕").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                    ui.add_space(4.0);
                }
            });
        if let Some(index) = dismissed {
            self.toasts.remove(index);
        }
    }
}

impl eframe::App for CheckpointApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick += 1;
        self.process_ui_events();
        let tick = self.tick;
        self.toasts.retain(|toast| !toast.expired(tick));

        self.show_check_dialog(ctx);

        egui::TopBottomPanel::top("checkpoint_header").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, DashboardTab::List, "List");
                ui.selectable_value(&mut self.tab, DashboardTab::Profile, "Profile");
            });
            ui.separator();
            match self.tab {
                DashboardTab::List => self.show_roster_list(ui),
                DashboardTab::Profile => self.show_profile(ui),
            }
        });

        self.show_toasts(ctx);

        // Keep polling the worker channel even when idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(value).strong().size(22.0));
            ui.small(label);
        });
    });
}

fn status_presentation(status: EmployeeStatus) -> (&'static str, egui::Color32) {
    match status {
        EmployeeStatus::Active => ("On site", egui::Color32::from_rgb(67, 181, 129)),
        EmployeeStatus::Offline => ("Off site", egui::Color32::GRAY),
        EmployeeStatus::OnBreak => ("On break", egui::Color32::from_rgb(212, 175, 55)),
    }
}

fn status_badge(ui: &mut egui::Ui, status: EmployeeStatus) {
    let (label, color) = status_presentation(status);
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.25))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).color(color).small());
        });
}

fn employee_card(ui: &mut egui::Ui, employee: &Employee) {
    ui.horizontal(|ui| {
        avatar(ui, &initials(&employee.name), 36.0);
        ui.vertical(|ui| {
            ui.strong(&employee.name);
            ui.small(&employee.position);
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            status_badge(ui, employee.status);
        });
    });
    ui.horizontal(|ui| {
        if let Some(time) = &employee.check_in_time {
            ui.small(format!("In {time}"));
        }
        if let Some(time) = &employee.check_out_time {
            ui.small(format!("Out {time}"));
        }
    });
    ui.small(format!("Employee ID: {}", employee.id.0));
}

fn movement_row(ui: &mut egui::Ui, row: &MovementRecord) {
    ui.horizontal(|ui| {
        let (label, color) = match row.event_type {
            MovementKind::Entry => ("entry", egui::Color32::from_rgb(67, 181, 129)),
            MovementKind::Exit => ("exit", egui::Color32::GRAY),
            MovementKind::Denied => ("denied", egui::Color32::from_rgb(200, 90, 90)),
        };
        ui.label(egui::RichText::new(label).color(color).small());
        ui.small(&row.event_datetime);
        if let Some(name) = &row.checkpoint_name {
            ui.small(name);
        }
    });
    if let Some(reason) = &row.deny_reason {
        ui.small(egui::RichText::new(reason).color(egui::Color32::from_rgb(200, 90, 90)));
    }
}

fn avatar(ui: &mut egui::Ui, initials: &str, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), diameter / 2.0, ui.visuals().faint_bg_color);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::TextStyle::Button.resolve(ui.style()),
        ui.visuals().strong_text_color(),
    );
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::protocol::EmployeeRecord;

    use crate::controller::events::{UiError, UiErrorContext};

    fn record(id: i64, name: &str, status: EmployeeStatus) -> EmployeeRecord {
        EmployeeRecord {
            id: EmployeeId(id),
            full_name: name.to_string(),
            position: "Engineer".to_string(),
            status,
            phone: "+7 (999) 000-00-00".to_string(),
        }
    }

    fn mock_app() -> (CheckpointApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = CheckpointApp::new(
            cmd_tx,
            ui_rx,
            StartupConfig {
                endpoint_url: "http://127.0.0.1:8700/attendance".to_string(),
                mock: true,
            },
        );
        (app, cmd_rx, ui_tx)
    }

    fn live_app() -> (CheckpointApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = CheckpointApp::new(
            cmd_tx,
            ui_rx,
            StartupConfig {
                endpoint_url: "http://127.0.0.1:8700/attendance".to_string(),
                mock: false,
            },
        );
        // Construction queues the initial connect.
        match cmd_rx.try_recv() {
            Ok(BackendCommand::Connect { endpoint_url }) => {
                assert_eq!(endpoint_url, "http://127.0.0.1:8700/attendance");
            }
            _ => panic!("expected connect command on startup"),
        }
        (app, cmd_rx, ui_tx)
    }

    #[test]
    fn mock_check_in_stamps_time_and_closes_dialog() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        app.open_check_dialog(EventType::Entry);
        app.dialog.input_id = "4".to_string();
        app.submit_check_dialog();

        let employee = app
            .roster_view()
            .iter()
            .find(|employee| employee.id == EmployeeId(4))
            .expect("seeded employee")
            .clone();
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert!(employee.check_in_time.is_some());
        assert_eq!(employee.check_out_time, None);

        assert!(!app.dialog.open);
        assert!(app.dialog.input_id.is_empty());
        let toast = app.toasts.last().expect("success toast");
        assert_eq!(toast.severity, ToastSeverity::Success);
        assert!(toast.message.contains("Elena Volkova"));
    }

    #[test]
    fn unknown_id_keeps_roster_and_dialog_untouched() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        let before = app.roster_view().to_vec();

        app.open_check_dialog(EventType::Entry);
        app.dialog.input_id = "999".to_string();
        app.submit_check_dialog();

        assert_eq!(app.roster_view(), before.as_slice());
        assert!(app.dialog.open);
        let toast = app.toasts.last().expect("error toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
    }

    #[test]
    fn malformed_id_is_rejected_before_any_lookup() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        let before = app.roster_view().to_vec();

        app.open_check_dialog(EventType::Exit);
        app.dialog.input_id = "12a".to_string();
        app.submit_check_dialog();

        assert_eq!(app.roster_view(), before.as_slice());
        assert!(app.dialog.open);
        let toast = app.toasts.last().expect("error toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert!(toast.message.contains("numeric"));
    }

    #[test]
    fn live_submit_queues_event_and_closes_dialog() {
        let (mut app, cmd_rx, _ui_tx) = live_app();
        app.open_check_dialog(EventType::Exit);
        app.dialog.input_id = " 2 ".to_string();
        app.submit_check_dialog();

        match cmd_rx.try_recv() {
            Ok(BackendCommand::RecordEvent {
                employee_id,
                event_type,
            }) => {
                assert_eq!(employee_id, EmployeeId(2));
                assert_eq!(event_type, EventType::Exit);
            }
            _ => panic!("expected record event command"),
        }
        assert!(!app.dialog.open);
    }

    #[test]
    fn roster_refresh_replaces_snapshot_and_prunes_dead_selection() {
        let (mut app, _cmd_rx, ui_tx) = live_app();
        ui_tx
            .send(UiEvent::RosterRefreshed(vec![
                record(1, "Ivan Petrov", EmployeeStatus::Active),
                record(2, "Anna Sidorova", EmployeeStatus::Offline),
            ]))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.roster_view().len(), 2);

        app.select_employee(EmployeeId(2));
        assert_eq!(
            app.selected_employee().map(|employee| employee.name.as_str()),
            Some("Anna Sidorova")
        );

        // Selection survives a refresh that still contains the employee.
        ui_tx
            .send(UiEvent::RosterRefreshed(vec![
                record(1, "Ivan Petrov", EmployeeStatus::Active),
                record(2, "Anna Sidorova", EmployeeStatus::Active),
            ]))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.selected, Some(EmployeeId(2)));

        // ...and is cleared by one that does not.
        ui_tx
            .send(UiEvent::RosterRefreshed(vec![record(
                1,
                "Ivan Petrov",
                EmployeeStatus::Active,
            )]))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.selected, None);
        assert!(app.selected_employee().is_none());
    }

    #[test]
    fn recorded_event_toast_names_employee_and_flags_lateness() {
        let (mut app, _cmd_rx, ui_tx) = live_app();
        ui_tx
            .send(UiEvent::EventRecorded {
                event_type: EventType::Entry,
                employee_name: "Anna Sidorova".to_string(),
                is_late: true,
            })
            .expect("send");
        app.process_ui_events();

        let toast = app.toasts.last().expect("success toast");
        assert_eq!(toast.severity, ToastSeverity::Success);
        assert!(toast.message.contains("Anna Sidorova"));
        assert!(toast.message.contains("late arrival"));
    }

    #[test]
    fn worker_errors_surface_as_error_toasts() {
        let (mut app, _cmd_rx, ui_tx) = live_app();
        ui_tx
            .send(UiEvent::Error(UiError::denied(
                UiErrorContext::RecordEvent,
                "Access revoked",
            )))
            .expect("send");
        app.process_ui_events();

        let toast = app.toasts.last().expect("error toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert_eq!(toast.message, "Access revoked");
    }

    #[test]
    fn aggregates_equal_direct_recomputation_after_any_mutation() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        app.open_check_dialog(EventType::Entry);
        app.dialog.input_id = "4".to_string();
        app.submit_check_dialog();
        app.open_check_dialog(EventType::Exit);
        app.dialog.input_id = "1".to_string();
        app.submit_check_dialog();

        let expected_active = app
            .roster_view()
            .iter()
            .filter(|employee| employee.status == EmployeeStatus::Active)
            .count();
        let expected_hours: f32 = app
            .roster_view()
            .iter()
            .map(|employee| employee.hours_today)
            .sum();
        assert_eq!(app.on_site_count(), expected_active);
        assert_eq!(app.hours_today_total(), expected_hours);
    }

    #[test]
    fn selecting_a_live_employee_requests_its_movement_log_once() {
        let (mut app, cmd_rx, ui_tx) = live_app();
        ui_tx
            .send(UiEvent::RosterRefreshed(vec![record(
                3,
                "Mikhail Kozlov",
                EmployeeStatus::Active,
            )]))
            .expect("send");
        app.process_ui_events();

        app.select_employee(EmployeeId(3));
        match cmd_rx.try_recv() {
            Ok(BackendCommand::FetchMovements { employee_id }) => {
                assert_eq!(employee_id, EmployeeId(3));
            }
            _ => panic!("expected fetch movements command"),
        }

        ui_tx
            .send(UiEvent::MovementsLoaded {
                employee_id: EmployeeId(3),
                movements: Vec::new(),
            })
            .expect("send");
        app.process_ui_events();

        // A cached log is not requested again.
        app.select_employee(EmployeeId(3));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn admin_toggle_swaps_the_icon_glyph_and_nothing_else() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        let roster_before = app.roster_view().to_vec();
        let selection_before = app.selected;

        assert_eq!(app.admin_icon(), "⚙");
        app.admin_view = !app.admin_view;
        assert_eq!(app.admin_icon(), "👥");

        assert_eq!(app.roster_view(), roster_before.as_slice());
        assert_eq!(app.selected, selection_before);
        assert_eq!(app.tab, DashboardTab::List);
    }

    #[test]
    fn profile_placeholder_state_is_keyed_on_selection() {
        let (mut app, _cmd_rx, _ui_tx) = mock_app();
        assert!(app.selected_employee().is_none());

        app.select_employee(EmployeeId(1));
        assert_eq!(
            app.selected_employee().map(|employee| employee.name.as_str()),
            Some("Ivan Petrov")
        );
    }
}
