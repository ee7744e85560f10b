// Multi-language support module
// Provides localized UI strings for English and Chinese

use crate::xtm_game::Mode;

#[derive(Clone)]
pub struct Assets {
    // Top bar buttons
    pub btn_win: &'static str,
    pub btn_lose: &'static str,
    pub btn_play: &'static str,

    // Key legend
    pub menu_help: &'static str,
    pub menu_options: &'static str,
    pub menu_exit: &'static str,

    // Click limit slider
    pub slider_label: &'static str,

    // Status bar
    pub status_mode: &'static str,
    pub status_mode_none: &'static str,
    pub status_clicks_fmt: &'static str, // "Clicks: {}/{}"
    pub status_pick_mode: &'static str,
    pub status_press_play: &'static str,
    pub status_in_round: &'static str,
    pub status_cleared: &'static str,
    pub status_exploded: &'static str,

    // Help modal
    pub help_title: &'static str,
    pub help_mode: &'static str,
    pub help_play: &'static str,
    pub help_limit: &'static str,
    pub help_move: &'static str,
    pub help_click: &'static str,

    // Options modal
    pub opt_title: &'static str,
    pub opt_show_indicator: &'static str,
    pub opt_ascii_icons: &'static str,
    pub opt_language: &'static str,
    pub opt_hint: &'static str,

    // Buttons
    pub btn_close: &'static str,

    // Terminal size messages
    pub tsmsg_title: &'static str,
    pub tsmsg_line1: &'static str,
    pub tsmsg_line2: &'static str, // "Minimum required: {} x {}"

    // Language names for selection
    pub lang_english: &'static str,
    pub lang_chinese: &'static str,
}

/// Returns English language assets
pub fn english_assets() -> Assets {
    Assets {
        btn_win: "WIN",
        btn_lose: "LOSE",
        btn_play: "PLAY",

        menu_help: "Help",
        menu_options: "Options",
        menu_exit: "Exit",

        slider_label: "Number of clicks:",

        status_mode: "Mode:",
        status_mode_none: "-",
        status_clicks_fmt: "Clicks: {}/{}",
        status_pick_mode: "Pick WIN or LOSE",
        status_press_play: "Press PLAY",
        status_in_round: "Pick a tile",
        status_cleared: "All clear!",
        status_exploded: "Boom!",

        help_title: "Help",
        help_mode: "  W | L          - choose WIN or LOSE",
        help_play: "  P | F2         - play a new round",
        help_limit: "  1-5 | + -      - number of clicks",
        help_move: "  Mouse | Arrows - move cursor",
        help_click: "  Click | Space  - open tile",

        opt_title: "Options",
        opt_show_indicator: "Show cursor",
        opt_ascii_icons: "ASCII icons",
        opt_language: "Language",
        opt_hint: "Space: toggle  Enter: save",

        btn_close: " CLOSE ",

        tsmsg_title: "Resize Terminal",
        tsmsg_line1: "Terminal size too small.",
        tsmsg_line2: "Minimum required: {} x {}",

        lang_english: "English",
        lang_chinese: "中文",
    }
}

/// Returns Chinese language assets
pub fn chinese_assets() -> Assets {
    Assets {
        btn_win: "赢",
        btn_lose: "输",
        btn_play: "开始",

        menu_help: "帮助",
        menu_options: "选项",
        menu_exit: "退出",

        slider_label: "点击次数:",

        status_mode: "模式:",
        status_mode_none: "-",
        status_clicks_fmt: "点击: {}/{}",
        status_pick_mode: "请选择 赢 或 输",
        status_press_play: "请按 开始",
        status_in_round: "请选择方块",
        status_cleared: "全部安全!",
        status_exploded: "踩雷了!",

        help_title: "帮助",
        help_mode: "  W | L          - 选择 赢 或 输",
        help_play: "  P | F2         - 开始新一局",
        help_limit: "  1-5 | + -      - 点击次数",
        help_move: "  鼠标 | 方向键  - 移动光标",
        help_click: "  单击 | 空格    - 打开方块",

        opt_title: "选项",
        opt_show_indicator: "显示光标",
        opt_ascii_icons: "ASCII 图标",
        opt_language: "语言",
        opt_hint: "空格: 切换  回车: 保存",

        btn_close: " 关闭 ",

        tsmsg_title: "调整终端大小",
        tsmsg_line1: "终端窗口太小。",
        tsmsg_line2: "最小尺寸: {} x {}",

        lang_english: "English",
        lang_chinese: "中文",
    }
}

/// Normalize a language code to one of the supported codes ("zh-CN" → "zh", others → "en")
pub fn normalize(lang_code: &str) -> &'static str {
    if lang_code.to_lowercase().starts_with("zh") {
        "zh"
    } else {
        "en"
    }
}

/// Holds the current language code and active string assets
pub struct Lang {
    pub current_lang: String,
    pub assets: Assets,
}

impl Lang {
    pub fn new(lang_code: &str) -> Self {
        let code = normalize(lang_code);
        Lang {
            current_lang: code.to_string(),
            assets: assets_for(code),
        }
    }

    /// Switch the current language and reload all string assets
    pub fn switch_to(&mut self, lang_code: &str) {
        let code = normalize(lang_code);
        self.current_lang = code.to_string();
        self.assets = assets_for(code);
    }

    /// Localized mode name for the status bar
    pub fn mode_name(&self, mode: Option<Mode>) -> &'static str {
        match mode {
            Some(Mode::Win) => self.assets.btn_win,
            Some(Mode::Lose) => self.assets.btn_lose,
            None => self.assets.status_mode_none,
        }
    }

    /// Fill a "{}" placeholder template in order
    pub fn fill(template: &str, values: &[&dyn std::fmt::Display]) -> String {
        let mut out = String::new();
        let mut parts = template.split("{}");
        if let Some(first) = parts.next() {
            out.push_str(first);
        }
        for (i, part) in parts.enumerate() {
            if let Some(v) = values.get(i) {
                out.push_str(&v.to_string());
            }
            out.push_str(part);
        }
        out
    }
}

fn assets_for(code: &str) -> Assets {
    if code == "zh" {
        chinese_assets()
    } else {
        english_assets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_language_codes() {
        assert_eq!(Lang::new("zh-CN").current_lang, "zh");
        assert_eq!(Lang::new("ZH_tw").current_lang, "zh");
        assert_eq!(Lang::new("en-US").current_lang, "en");
        assert_eq!(Lang::new("fr").current_lang, "en");
    }

    #[test]
    fn switch_reloads_assets() {
        let mut lang = Lang::new("en");
        assert_eq!(lang.assets.btn_play, "PLAY");
        lang.switch_to("zh");
        assert_eq!(lang.assets.btn_play, "开始");
        assert_eq!(lang.mode_name(Some(Mode::Lose)), "输");
    }

    #[test]
    fn fills_placeholders_in_order() {
        assert_eq!(Lang::fill("Clicks: {}/{}", &[&2, &5]), "Clicks: 2/5");
        assert_eq!(Lang::fill("no placeholders", &[]), "no placeholders");
        assert_eq!(Lang::fill("{} x {}", &[&60]), "60 x ");
    }
}
