//! File name to icon resolution.
//!
//! Resolution is a pure lookup: exact (lowercased) file names first, then the
//! `*.config.js` / `*.config.ts` rule, then the lowercased extension. Anything
//! unmatched gets the generic file icon. Icons are presentational only.

use ratatui::style::Color;

/// Icon family shown in front of a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Npm,
    Docker,
    Build,
    Jenkins,
    Markdown,
    Git,
    Config,
    Html,
    Css,
    Sass,
    Less,
    JavaScript,
    React,
    Vue,
    Code,
    Php,
    Python,
    Java,
    Ruby,
    Go,
    Rust,
    Swift,
    C,
    Terminal,
    List,
    Database,
    Text,
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    Image,
    Audio,
    Video,
    Archive,
    Font,
    Folder,
    FolderOpen,
    File,
}

impl IconCategory {
    /// Single-cell glyph drawn in the terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            IconCategory::Npm => "⬢",
            IconCategory::Docker => "◈",
            IconCategory::Build => "⚒",
            IconCategory::Jenkins => "♟",
            IconCategory::Markdown => "¶",
            IconCategory::Git => "±",
            IconCategory::Config => "⚙",
            IconCategory::Html => "◇",
            IconCategory::Css | IconCategory::Sass | IconCategory::Less => "#",
            IconCategory::JavaScript => "ʝ",
            IconCategory::React => "⚛",
            IconCategory::Vue => "▽",
            IconCategory::Code => "‹",
            IconCategory::Php => "φ",
            IconCategory::Python => "π",
            IconCategory::Java => "♨",
            IconCategory::Ruby => "♦",
            IconCategory::Go => "γ",
            IconCategory::Rust => "®",
            IconCategory::Swift => "ς",
            IconCategory::C => "©",
            IconCategory::Terminal => "$",
            IconCategory::List => "≡",
            IconCategory::Database => "▤",
            IconCategory::Text => "≣",
            IconCategory::Pdf => "▣",
            IconCategory::Word => "W",
            IconCategory::Spreadsheet => "▦",
            IconCategory::Presentation => "▥",
            IconCategory::Image => "▨",
            IconCategory::Audio => "♪",
            IconCategory::Video => "▶",
            IconCategory::Archive => "▩",
            IconCategory::Font => "ƒ",
            IconCategory::Folder => "▸",
            IconCategory::FolderOpen => "▾",
            IconCategory::File => "·",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IconCategory::Npm => "npm",
            IconCategory::Docker => "docker",
            IconCategory::Build => "build",
            IconCategory::Jenkins => "jenkins",
            IconCategory::Markdown => "markdown",
            IconCategory::Git => "git",
            IconCategory::Config => "config",
            IconCategory::Html => "html",
            IconCategory::Css => "css",
            IconCategory::Sass => "sass",
            IconCategory::Less => "less",
            IconCategory::JavaScript => "javascript",
            IconCategory::React => "react",
            IconCategory::Vue => "vue",
            IconCategory::Code => "code",
            IconCategory::Php => "php",
            IconCategory::Python => "python",
            IconCategory::Java => "java",
            IconCategory::Ruby => "ruby",
            IconCategory::Go => "go",
            IconCategory::Rust => "rust",
            IconCategory::Swift => "swift",
            IconCategory::C => "c",
            IconCategory::Terminal => "terminal",
            IconCategory::List => "list",
            IconCategory::Database => "database",
            IconCategory::Text => "text",
            IconCategory::Pdf => "pdf",
            IconCategory::Word => "word",
            IconCategory::Spreadsheet => "spreadsheet",
            IconCategory::Presentation => "presentation",
            IconCategory::Image => "image",
            IconCategory::Audio => "audio",
            IconCategory::Video => "video",
            IconCategory::Archive => "archive",
            IconCategory::Font => "font",
            IconCategory::Folder => "folder",
            IconCategory::FolderOpen => "folder-open",
            IconCategory::File => "file",
        }
    }
}

/// Icon and display color for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileIcon {
    pub category: IconCategory,
    pub color: Color,
}

const fn icon(category: IconCategory, color: Color) -> FileIcon {
    FileIcon { category, color }
}

const GRAY: Color = Color::Rgb(107, 114, 128);
const LIGHT_GRAY: Color = Color::Rgb(156, 163, 175);
const DOC_GRAY: Color = Color::Rgb(209, 213, 219);
const YELLOW: Color = Color::Rgb(202, 138, 4);
const PURPLE: Color = Color::Rgb(168, 85, 247);
const FOLDER: Color = Color::Rgb(14, 165, 233);

/// Generic icon for anything unmatched.
pub const DEFAULT_ICON: FileIcon = icon(IconCategory::File, LIGHT_GRAY);

/// Exact lowercased file names. Checked before extensions.
static SPECIAL_FILES: &[(&str, FileIcon)] = &[
    ("package.json", icon(IconCategory::Npm, Color::Rgb(203, 56, 55))),
    ("dockerfile", icon(IconCategory::Docker, Color::Rgb(36, 150, 237))),
    ("makefile", icon(IconCategory::Build, GRAY)),
    ("jenkinsfile", icon(IconCategory::Jenkins, Color::Rgb(210, 73, 57))),
    ("readme.md", icon(IconCategory::Markdown, DOC_GRAY)),
    (".gitignore", icon(IconCategory::Git, Color::Rgb(240, 80, 50))),
    (".gitattributes", icon(IconCategory::Git, Color::Rgb(240, 80, 50))),
];

/// Tool configuration scripts such as `vite.config.ts`.
static CONFIG_SCRIPT_SUFFIXES: &[&str] = &[".config.js", ".config.ts"];

const CONFIG_SCRIPT_ICON: FileIcon = icon(IconCategory::Config, GRAY);

/// Lowercased extensions.
static EXTENSIONS: &[(&[&str], FileIcon)] = &[
    // Web
    (&["html", "htm"], icon(IconCategory::Html, Color::Rgb(227, 79, 38))),
    (&["css"], icon(IconCategory::Css, Color::Rgb(21, 114, 182))),
    (&["scss", "sass"], icon(IconCategory::Sass, Color::Rgb(204, 102, 153))),
    (&["less"], icon(IconCategory::Less, Color::Rgb(29, 54, 93))),
    (&["js", "cjs", "mjs"], icon(IconCategory::JavaScript, Color::Rgb(247, 223, 30))),
    (&["ts"], icon(IconCategory::JavaScript, Color::Rgb(49, 120, 198))),
    (&["jsx", "tsx"], icon(IconCategory::React, Color::Rgb(97, 218, 251))),
    (&["vue"], icon(IconCategory::Vue, Color::Rgb(79, 192, 141))),
    (&["svelte"], icon(IconCategory::Code, Color::Rgb(255, 62, 0))),
    (&["php"], icon(IconCategory::Php, Color::Rgb(119, 123, 180))),
    // Backend / systems
    (&["py", "pyc"], icon(IconCategory::Python, Color::Rgb(55, 118, 171))),
    (&["java", "class", "jar"], icon(IconCategory::Java, Color::Rgb(0, 115, 150))),
    (&["rb"], icon(IconCategory::Ruby, Color::Rgb(204, 52, 45))),
    (&["go"], icon(IconCategory::Go, Color::Rgb(0, 173, 216))),
    (&["rs"], icon(IconCategory::Rust, Color::Rgb(222, 165, 132))),
    (&["swift"], icon(IconCategory::Swift, Color::Rgb(240, 81, 56))),
    (&["c", "h"], icon(IconCategory::C, Color::Rgb(85, 85, 85))),
    (&["cpp", "hpp", "cc"], icon(IconCategory::C, Color::Rgb(0, 89, 156))),
    (&["cs"], icon(IconCategory::Code, Color::Rgb(35, 145, 32))),
    // Scripts
    (&["sh", "bash", "zsh", "ps1", "bat", "cmd"], icon(IconCategory::Terminal, GRAY)),
    // Data / config
    (&["json"], icon(IconCategory::Code, YELLOW)),
    (&["xml"], icon(IconCategory::Code, Color::Rgb(249, 115, 22))),
    (&["yaml", "yml"], icon(IconCategory::List, PURPLE)),
    (&["toml", "ini", "env"], icon(IconCategory::Config, GRAY)),
    (&["sql", "db", "sqlite"], icon(IconCategory::Database, Color::Rgb(96, 165, 250))),
    // Documents
    (&["md"], icon(IconCategory::Markdown, DOC_GRAY)),
    (&["txt"], icon(IconCategory::Text, LIGHT_GRAY)),
    (&["pdf"], icon(IconCategory::Pdf, Color::Rgb(239, 68, 68))),
    (&["doc", "docx"], icon(IconCategory::Word, Color::Rgb(29, 78, 216))),
    (&["xls", "xlsx", "csv"], icon(IconCategory::Spreadsheet, Color::Rgb(22, 163, 74))),
    (&["ppt", "pptx"], icon(IconCategory::Presentation, Color::Rgb(234, 88, 12))),
    // Media
    (
        &["png", "jpg", "jpeg", "gif", "svg", "ico", "webp"],
        icon(IconCategory::Image, PURPLE),
    ),
    (&["mp3", "wav", "ogg"], icon(IconCategory::Audio, YELLOW)),
    (&["mp4", "mov", "avi", "webm"], icon(IconCategory::Video, Color::Rgb(219, 39, 119))),
    // Archives
    (&["zip", "rar", "7z", "tar", "gz"], icon(IconCategory::Archive, Color::Rgb(217, 119, 6))),
    // Fonts
    (&["ttf", "otf", "woff", "woff2"], icon(IconCategory::Font, GRAY)),
];

/// Resolve the icon for a file name.
pub fn resolve(name: &str) -> FileIcon {
    let lower = name.to_lowercase();

    if let Some((_, icon)) = SPECIAL_FILES.iter().find(|(n, _)| *n == lower) {
        return *icon;
    }
    if CONFIG_SCRIPT_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return CONFIG_SCRIPT_ICON;
    }

    let ext = extension(&lower);
    EXTENSIONS
        .iter()
        .find(|(exts, _)| exts.contains(&ext))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Folder icon, open or closed.
pub fn folder(expanded: bool) -> FileIcon {
    let category = if expanded {
        IconCategory::FolderOpen
    } else {
        IconCategory::Folder
    };
    icon(category, FOLDER)
}

/// Text after the last dot, or the whole name when there is none.
fn extension(lower_name: &str) -> &str {
    lower_name.rsplit('.').next().unwrap_or(lower_name)
}
