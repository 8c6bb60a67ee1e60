//! Stands in for a window's event loop: a thread which plays back a fixed walk through the map, one batch of events
//! per frame.
use std::thread::JoinHandle;

use crossbeam::channel as chan;
use log::*;
use wallcaster_engine::{InputEvent, KeyCode, MouseButton};

fn left_click(pressed: bool) -> InputEvent {
    InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed,
    }
}

/// What happens on one frame of the walk.
fn events_for_frame(frame: u64) -> Vec<InputEvent> {
    use InputEvent::{KeyDown, KeyUp, MouseMotion};

    // The walk repeats every 240 frames: forward, turn, strafe, back up, turn back.
    match frame % 240 {
        0 => vec![KeyDown(KeyCode::W)],
        60 => vec![KeyUp(KeyCode::W)],
        61..=90 => vec![MouseMotion { dx: 15.0 }],
        91 => vec![KeyDown(KeyCode::D), left_click(true)],
        120 => vec![KeyUp(KeyCode::D), left_click(false), KeyDown(KeyCode::Down)],
        150 => vec![KeyUp(KeyCode::Down), KeyDown(KeyCode::Left)],
        180 => vec![KeyUp(KeyCode::Left)],
        181..=210 => vec![MouseMotion { dx: -15.0 }],
        _ => vec![],
    }
}

/// Start the input thread.  It sends one batch per frame for `frames` frames, then a [InputEvent::Quit].
///
/// The channel holds a single batch, so the thread can never run ahead of the frame loop.
pub fn spawn_script(
    frames: u64,
) -> std::io::Result<(chan::Receiver<Vec<InputEvent>>, JoinHandle<()>)> {
    let (sender, receiver) = chan::bounded(1);
    let handle = std::thread::Builder::new()
        .name("Scripted input".into())
        .spawn(move || {
            for frame in 0..frames {
                if sender.send(events_for_frame(frame)).is_err() {
                    debug!("Frame loop went away after {} frames", frame);
                    return;
                }
            }
            let _ = sender.send(vec![InputEvent::Quit]);
        })?;
    Ok((receiver, handle))
}
