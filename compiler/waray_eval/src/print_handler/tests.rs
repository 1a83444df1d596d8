use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("maupay");
    assert_eq!(handler.get_output(), "maupay\n");
}

#[test]
fn buffer_handler_keeps_line_order() {
    let handler = BufferPrintHandler::new();
    handler.println("1");
    handler.println("waray");
    handler.println("[1, 2]");
    assert_eq!(handler.get_output(), "1\nwaray\n[1, 2]\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.println("tuod");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
    handler.clear();
}

#[test]
fn shared_clone_sees_same_buffer() {
    let handler = buffer_handler();
    let host = Arc::clone(&handler);
    handler.println("5");
    assert_eq!(host.get_output(), "5\n");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("buwa");
    assert_eq!(handler.get_output(), "");
}
