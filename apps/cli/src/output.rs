use chrono::{DateTime, Local, Utc};

use appointment_cell::{Appointment, AppointmentBoard, RemoteSyncClient};
use doctor_cell::DoctorDirectory;

pub fn print_doctors(directory: &DoctorDirectory) {
    if directory.is_empty() {
        println!("No doctors available.");
        return;
    }
    for doctor in directory.doctors() {
        println!("{}  {}", doctor.id, doctor.option_label());
    }
}

pub fn print_appointments<C: RemoteSyncClient>(board: &AppointmentBoard<C>) {
    let visible = board.visible();
    if visible.is_empty() {
        println!("No appointments found.");
        return;
    }
    for appointment in visible {
        print_card(board, appointment);
        println!();
    }
}

pub fn print_card<C: RemoteSyncClient>(board: &AppointmentBoard<C>, appointment: &Appointment) {
    println!("{}  [{}]", appointment.patient_name, appointment.id);
    println!("  Doctor: {}", board.doctor_label(appointment));
    println!("  Date:   {}", local_time(appointment.appointment_date));
    println!("  Notes:  {}", appointment.notes_display());
    if board.can_complete(appointment) {
        println!("  Status: {} (complete with `clinic complete {}`)", appointment.status, appointment.id);
    } else {
        println!("  Status: {}", appointment.status);
    }
}

fn local_time(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%B %-d, %Y %-I:%M %p").to_string()
}
