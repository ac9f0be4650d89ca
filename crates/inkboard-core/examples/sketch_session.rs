//! Headless editing session driven by a scripted event stream.
//!
//! Run with `RUST_LOG=debug` to watch the interaction log.

use inkboard_core::{EditCommand, Editor, Element, PointerEvent, Tool};
use kurbo::Point;

fn main() {
    env_logger::init();

    let mut editor = Editor::default();

    editor.set_tool(Tool::Rectangle);
    drag(&mut editor, (20.0, 20.0), (140.0, 90.0));

    editor.set_tool(Tool::Line);
    drag(&mut editor, (160.0, 30.0), (240.0, 80.0));

    editor.set_tool(Tool::Pencil);
    scribble(&mut editor, (40.0, 120.0));

    editor.set_tool(Tool::Text);
    editor.dispatch(
        PointerEvent::Down {
            position: Point::new(160.0, 120.0),
        }
        .into(),
    );
    editor.commit_text("inkboard".to_string());

    // Drag the rectangle by its body.
    editor.set_tool(Tool::Selection);
    drag(&mut editor, (80.0, 55.0), (120.0, 155.0));

    println!("after drawing:");
    report(&editor);

    editor.dispatch(EditCommand::Undo.into());
    editor.dispatch(EditCommand::Undo.into());
    println!("\nafter two undos:");
    report(&editor);

    editor.dispatch(EditCommand::Redo.into());
    println!("\nafter one redo:");
    report(&editor);

    let hover = Point::new(40.0, 120.0);
    println!(
        "\nhovering ({:.0}, {:.0}) suggests the '{}' cursor",
        hover.x,
        hover.y,
        editor.cursor_hint(hover).name()
    );
}

fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    let from = Point::new(from.0, from.1);
    let to = Point::new(to.0, to.1);
    editor.dispatch(PointerEvent::Down { position: from }.into());
    editor.dispatch(
        PointerEvent::Moved {
            position: from.midpoint(to),
        }
        .into(),
    );
    editor.dispatch(PointerEvent::Moved { position: to }.into());
    editor.dispatch(PointerEvent::Up { position: to }.into());
}

fn scribble(editor: &mut Editor, at: (f64, f64)) {
    let origin = Point::new(at.0, at.1);
    editor.dispatch(PointerEvent::Down { position: origin }.into());
    for step in 1..=8 {
        let wave = Point::new(
            origin.x + step as f64 * 6.0,
            origin.y + if step % 2 == 0 { 8.0 } else { -8.0 },
        );
        editor.dispatch(PointerEvent::Moved { position: wave }.into());
    }
    editor.dispatch(PointerEvent::Up { position: origin }.into());
}

fn report(editor: &Editor) {
    for element in editor.board().elements() {
        let bounds = element.bounds();
        let label = match element {
            Element::Line(_) => "line".to_string(),
            Element::Rectangle(_) => "rectangle".to_string(),
            Element::Freehand(stroke) => format!("freehand ({} points)", stroke.points.len()),
            Element::Text(text) => format!("text {:?}", text.content),
        };
        println!(
            "  #{} {label} at ({:.0}, {:.0}) size {:.0}x{:.0}",
            element.id(),
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        );
    }
    println!(
        "  {} elements, undo {}, redo {}",
        editor.board().len(),
        if editor.can_undo() { "yes" } else { "no" },
        if editor.can_redo() { "yes" } else { "no" }
    );
}
