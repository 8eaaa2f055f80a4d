//! Hello World notification demo.
use std::sync::Arc;
use std::time::Duration;

use filedrop_notification::{
    ActivationEvent, LocalNotification, NotificationCenter, Schedule, SystemNotifications,
};

#[tokio::main]
async fn main() {
    let center = SystemNotifications::new();
    center.add_listener(Arc::new(|event: &ActivationEvent| {
        println!("Notification {} activated ({})", event.id(), event.action_id);
    }));

    println!("Scheduling notification...");
    let notification = LocalNotification::new(1)
        .title("Hello")
        .body("World from filedrop!")
        .schedule(Schedule::after(Duration::from_secs(1)));

    match center.schedule(vec![notification]).await {
        Ok(()) => println!("Notification scheduled."),
        Err(e) => println!("Error scheduling notification: {e}"),
    }

    tokio::time::sleep(Duration::from_secs(5)).await;
}
