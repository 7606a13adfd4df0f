//! 組み込みの設定セクション

use super::definition::{Preference, PreferencesSection};

/// 設定キー
pub mod keys {
    pub const PAGE_SCROLL_DIRECTION: &str = "page_scroll_direction";
    pub const PAGE_LAYOUT_MODE: &str = "page_layout_mode";
    pub const SCROLL_CONTINUOUSLY: &str = "scroll_continuously";
    pub const FIT_PAGE_TO_WIDTH: &str = "fit_page_to_width";
    pub const FIRST_PAGE_AS_SINGLE: &str = "first_page_as_single";
    pub const SHOW_GAP_BETWEEN_PAGES: &str = "show_gap_between_pages";
    pub const IMMERSIVE_MODE: &str = "immersive_mode";
    pub const USER_INTERFACE_VIEW_MODE: &str = "user_interface_view_mode";
    pub const HIDE_UI_WHEN_CREATING_ANNOTATIONS: &str = "hide_ui_when_creating_annotations";
    pub const SHOW_SEARCH_ACTION: &str = "show_search_action";
    pub const INLINE_SEARCH: &str = "inline_search";
    pub const THUMBNAIL_BAR_MODE: &str = "thumbnail_bar_mode";
    pub const SHOW_THUMBNAIL_GRID_ACTION: &str = "show_thumbnail_grid_action";
    pub const SHOW_OUTLINE_ACTION: &str = "show_outline_action";
    pub const SHOW_ANNOTATION_LIST_ACTION: &str = "show_annotation_list_action";
    pub const SHOW_PAGE_NUMBER_OVERLAY: &str = "show_page_number_overlay";
    pub const SHOW_PAGE_LABELS: &str = "show_page_labels";
    pub const INVERT_COLORS: &str = "invert_colors";
    pub const GRAYSCALE: &str = "grayscale";
    pub const START_PAGE: &str = "start_page";
    pub const RESTORE_LAST_VIEWED_PAGE: &str = "restore_last_viewed_page";
    pub const CLEAR_CACHE: &str = "clear_cache";
    pub const CLEAR_APP_DATA: &str = "clear_app_data";
    pub const ENABLE_ANNOTATION_EDITING: &str = "enable_annotation_editing";
    pub const ENABLE_ANNOTATION_ROTATION: &str = "enable_annotation_rotation";
    pub const ANNOTATION_REPLY_FEATURES: &str = "annotation_reply_features";
    pub const ENABLE_TEXT_SELECTION: &str = "enable_text_selection";
    pub const ENABLE_FORM_EDITING: &str = "enable_form_editing";
    pub const SHOW_SHARE_ACTION: &str = "show_share_action";
    pub const SHOW_PRINT_ACTION: &str = "show_print_action";
    pub const THEME_MODE: &str = "theme_mode";
    pub const ENABLE_VOLUME_BUTTONS_NAVIGATION: &str = "enable_volume_buttons_navigation";
    pub const MULTI_THREADED_RENDERING: &str = "multi_threaded_rendering";
    pub const LEAK_CANARY_ENABLED: &str = "leak_canary_enabled";
}

use keys::*;

/// 設定画面に並ぶセクション
pub fn builtin_sections() -> Vec<PreferencesSection> {
    vec![
        PreferencesSection::new(
            "Layout",
            vec![
                Preference::radio(
                    "Scroll direction",
                    PAGE_SCROLL_DIRECTION,
                    &["HORIZONTAL", "VERTICAL"],
                    "HORIZONTAL",
                ),
                Preference::radio(
                    "Page layout",
                    PAGE_LAYOUT_MODE,
                    &["AUTO", "SINGLE", "DOUBLE"],
                    "AUTO",
                ),
                Preference::checkbox("Scroll continuously", SCROLL_CONTINUOUSLY, false),
                Preference::checkbox("Fit page to width", FIT_PAGE_TO_WIDTH, true),
                Preference::checkbox("Restore last viewed page", RESTORE_LAST_VIEWED_PAGE, false),
                Preference::checkbox("Show page number overlay", SHOW_PAGE_NUMBER_OVERLAY, true),
                Preference::checkbox("Show page labels", SHOW_PAGE_LABELS, true),
                Preference::radio(
                    "User interface view mode",
                    USER_INTERFACE_VIEW_MODE,
                    &[
                        "USER_INTERFACE_VIEW_MODE_AUTOMATIC",
                        "USER_INTERFACE_VIEW_MODE_AUTOMATIC_BORDER_PAGES",
                        "USER_INTERFACE_VIEW_MODE_HIDDEN",
                        "USER_INTERFACE_VIEW_MODE_MANUAL",
                        "USER_INTERFACE_VIEW_MODE_VISIBLE",
                    ],
                    "USER_INTERFACE_VIEW_MODE_AUTOMATIC",
                ),
                Preference::checkbox(
                    "Hide UI when creating annotations",
                    HIDE_UI_WHEN_CREATING_ANNOTATIONS,
                    true,
                ),
                Preference::radio("Theme mode", THEME_MODE, &["DEFAULT", "NIGHT"], "DEFAULT"),
            ],
        ),
        PreferencesSection::new(
            "Double page",
            vec![
                Preference::checkbox("First page as single", FIRST_PAGE_AS_SINGLE, false),
                Preference::checkbox("Show gap between pages", SHOW_GAP_BETWEEN_PAGES, false),
            ],
        ),
        PreferencesSection::new(
            "Search",
            vec![
                Preference::checkbox("Show search action", SHOW_SEARCH_ACTION, true),
                Preference::checkbox("Inline search", INLINE_SEARCH, true),
            ],
        ),
        PreferencesSection::new(
            "Thumbnails & outline",
            vec![
                Preference::radio(
                    "Thumbnail bar mode",
                    THUMBNAIL_BAR_MODE,
                    &[
                        "THUMBNAIL_BAR_MODE_FLOATING",
                        "THUMBNAIL_BAR_MODE_PINNED",
                        "THUMBNAIL_BAR_MODE_SCROLLABLE",
                        "THUMBNAIL_BAR_MODE_NONE",
                    ],
                    "THUMBNAIL_BAR_MODE_FLOATING",
                ),
                Preference::checkbox("Show thumbnail grid", SHOW_THUMBNAIL_GRID_ACTION, true),
                Preference::checkbox("Enable document outline", SHOW_OUTLINE_ACTION, true),
                Preference::checkbox("Show annotation list", SHOW_ANNOTATION_LIST_ACTION, true),
            ],
        ),
        PreferencesSection::new(
            "Annotations",
            vec![
                Preference::checkbox("Enable annotation editing", ENABLE_ANNOTATION_EDITING, true),
                Preference::checkbox(
                    "Enable annotation rotation",
                    ENABLE_ANNOTATION_ROTATION,
                    true,
                ),
                Preference::radio(
                    "Annotation replies",
                    ANNOTATION_REPLY_FEATURES,
                    &["ENABLED", "READ_ONLY", "DISABLED"],
                    "ENABLED",
                ),
            ],
        ),
        PreferencesSection::new(
            "Forms",
            vec![Preference::checkbox("Enable form editing", ENABLE_FORM_EDITING, true)],
        ),
        PreferencesSection::new(
            "Actions",
            vec![
                Preference::checkbox("Show share action", SHOW_SHARE_ACTION, true),
                Preference::checkbox("Show print action", SHOW_PRINT_ACTION, true),
            ],
        ),
        PreferencesSection::new(
            "Customization",
            vec![
                Preference::checkbox("Invert page colors", INVERT_COLORS, false),
                Preference::checkbox("Grayscale", GRAYSCALE, false),
                Preference::checkbox("Enable text selection", ENABLE_TEXT_SELECTION, true),
                Preference::checkbox(
                    "Volume buttons navigation",
                    ENABLE_VOLUME_BUTTONS_NAVIGATION,
                    false,
                ),
            ],
        ),
        PreferencesSection::new(
            "Activity",
            vec![Preference::checkbox("Immersive mode", IMMERSIVE_MODE, true)],
        ),
        PreferencesSection::new(
            "Other",
            vec![
                Preference::integer(
                    "Start page",
                    START_PAGE,
                    "Page index the document opens at",
                    0,
                ),
                Preference::checkbox("Multithreaded rendering", MULTI_THREADED_RENDERING, true),
                Preference::checkbox("Leak detection", LEAK_CANARY_ENABLED, true),
                Preference::button("Clear cache", CLEAR_CACHE, "Removes rendered page caches"),
                Preference::button(
                    "Clear app data",
                    CLEAR_APP_DATA,
                    "Deletes stored settings and restores the defaults",
                ),
            ],
        ),
    ]
}
