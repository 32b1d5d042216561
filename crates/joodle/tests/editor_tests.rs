//! End-to-end use of the editor services through the prelude.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use joodle::prelude::*;

const STYLES: &str = r##"{
    "string": { "color": "#c41a16" },
    "number": { "color": "#1c00cf" }
}"##;

#[test]
fn test_styles_survive_gzip_storage() {
    let dir = tempfile::tempdir().unwrap();
    let packed = dir.path().join("styles.json.gz");
    let plain = dir.path().join("styles.json");

    joodle::codec::write_gzip(&packed, STYLES.as_bytes()).unwrap();
    let restored = joodle::codec::read_gzip(&packed).unwrap();
    fs::write(&plain, &restored).unwrap();

    let catalog = read_styles(&plain).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(read_keys(&plain).unwrap().len(), 2);
}

#[test]
fn test_outline_menu_lists_styles() {
    let catalog = Rc::new(joodle::style::parse_styles(STYLES).unwrap());
    let removed = Rc::new(RefCell::new(Vec::new()));

    let styles = Rc::clone(&catalog);
    let sink = Rc::clone(&removed);
    let mut outline = MenuOutline::with_delegate(
        OutlineHooks::new()
            .on_menu(move |_, _| {
                let mut submenu = ContextMenu::new();
                for key in styles.keys() {
                    submenu.push(MenuItem::action(key.as_str(), format!("style.{key}")));
                }
                Some(ContextMenu::new().with_submenu("Apply Style", submenu))
            })
            .on_delete(move |row| sink.borrow_mut().push(row)),
    );

    let value = OutlineColumn::new(1, "value");
    let menu = outline.menu_for_row(Some(0), Some(&value)).unwrap();
    assert!(menu.find_action("style.number").is_some());
    assert!(outline.menu_for_row(None, Some(&value)).is_none());

    assert!(outline.delete_row(Some(3)));
    assert_eq!(*removed.borrow(), [3]);
}

#[test]
fn test_codec_errors_are_classified() {
    let gzip = compress_gzip(b"payload").unwrap();
    let err = decompress_deflate(&gzip).unwrap_err();
    assert_eq!(err.kind(), CodecErrorKind::Format);

    let missing = read_styles("/definitely/not/here.json").unwrap_err();
    assert_eq!(missing.kind(), StyleErrorKind::Io);
}
