//! Built-in site definition used when no `docnav.toml` overrides it.

use docnav_sidebar::Section;

use crate::LocaleConfig;

pub(crate) const TITLE: &str = "Cosmos SDK";
pub(crate) const BASE: &str = "${VUEPRESS_BASE:-/}";
pub(crate) const SEARCH_MAX_SUGGESTIONS: u32 = 10;
pub(crate) const PERMALINK_SYMBOL: &str = "";
pub(crate) const REPO: &str = "cosmos/cosmos-sdk";
pub(crate) const DOCS_DIR: &str = "docs";
pub(crate) const EDIT_LINKS: bool = true;

struct LocaleTable {
    path: &'static str,
    lang: &'static str,
    label: &'static str,
    directory: &'static str,
    sections: [(&'static str, &'static str); 5],
}

const LOCALES: [LocaleTable; 4] = [
    LocaleTable {
        path: "/",
        lang: "en-US",
        label: "English",
        directory: "",
        sections: [
            ("Intro", "intro"),
            ("Basics", "basics"),
            ("SDK Core", "core"),
            ("About Modules", "modules"),
            ("Interfaces", "interfaces"),
        ],
    },
    LocaleTable {
        path: "/ru/",
        lang: "ru",
        label: "Русский",
        directory: "ru",
        sections: [
            ("Введение", "intro"),
            ("Основы", "basics"),
            ("SDK Core", "core"),
            ("Модули", "modules"),
            ("Интерфейсы", "interfaces"),
        ],
    },
    LocaleTable {
        path: "/kr/",
        lang: "kr",
        label: "한국어",
        directory: "kr",
        sections: [
            ("소개", "intro"),
            ("기초", "basics"),
            ("SDK Core", "core"),
            ("모듈들", "modules"),
            ("인터페이스", "interfaces"),
        ],
    },
    LocaleTable {
        path: "/cn/",
        lang: "cn",
        label: "中文",
        directory: "cn",
        sections: [
            ("介绍", "intro"),
            ("基本", "basics"),
            ("SDK Core", "core"),
            ("模块", "modules"),
            ("接口", "interfaces"),
        ],
    },
];

pub(crate) fn locales() -> Vec<LocaleConfig> {
    LOCALES
        .iter()
        .map(|locale| LocaleConfig {
            path: locale.path.to_owned(),
            lang: locale.lang.to_owned(),
            label: locale.label.to_owned(),
            directory: locale.directory.to_owned(),
            sections: locale
                .sections
                .iter()
                .map(|(title, dir)| Section::new(*title, *dir))
                .collect(),
        })
        .collect()
}
