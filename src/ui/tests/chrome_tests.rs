use crate::ui::chrome::UiChrome;
use crate::ui::width_util::WidthUtil;

#[test]
fn ui_chrome_centers_content_in_box() {
    let chrome = UiChrome::new();
    assert_eq!(chrome.center_in_box("Hi", 6), "  Hi  ");
    assert_eq!(chrome.center_in_box("Hi", 5), " Hi  ");
    assert_eq!(chrome.center_in_box("Too wide", 3), "Too wide");
}

#[test]
fn ui_chrome_banner_lines_share_one_width() {
    let chrome = UiChrome::new();
    let util = WidthUtil::default();
    let mut buf = Vec::new();
    chrome.write_banner(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let widths: Vec<usize> = text.lines().map(|l| util.visible_width(l)).collect();
    assert_eq!(widths.len(), 4);
    assert!(widths.iter().all(|w| *w == widths[0]));
    assert!(text.contains("C O U R T B O A R D"));
}
