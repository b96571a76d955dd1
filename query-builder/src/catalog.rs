//! Static operator reference and query templates.

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorStatus {
    Active,
    /// Works partially or inconsistently
    Limited,
    Deprecated,
}

impl OperatorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OperatorStatus::Active => "動作中",
            OperatorStatus::Limited => "制限あり",
            OperatorStatus::Deprecated => "廃止済み",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorDescriptor {
    pub command: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub status: OperatorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorCategory {
    Basic,
    SiteFile,
    Target,
}

impl OperatorCategory {
    pub const ALL: [OperatorCategory; 3] = [OperatorCategory::Basic, OperatorCategory::SiteFile, OperatorCategory::Target];

    pub fn title(&self) -> &'static str {
        match self {
            OperatorCategory::Basic => "基本の絞り込み",
            OperatorCategory::SiteFile => "サイト・ファイル",
            OperatorCategory::Target => "検索対象の指定",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub query: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateIcon {
    Target,
    FileText,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateGroup {
    pub category: &'static str,
    pub icon: TemplateIcon,
    pub templates: &'static [TemplateDescriptor],
}

const fn op(command: &'static str, name: &'static str, description: &'static str, example: &'static str, status: OperatorStatus) -> OperatorDescriptor {
    OperatorDescriptor { command, name, description, example, status }
}

const fn template(name: &'static str, query: &'static str, description: &'static str) -> TemplateDescriptor {
    TemplateDescriptor { name, query, description }
}

use OperatorStatus::*;

const BASIC_OPERATORS: &[OperatorDescriptor] = &[
    op("\"\"", "完全一致", "ダブルクオーテーションで囲んだフレーズと完全に一致する結果を検索", "\"東京オリンピック 2024\"", Active),
    op("-", "除外", "ハイフンの直後に指定したキーワードを含むページを除外", "プログラミング -Python", Active),
    op("OR", "いずれかを含む", "指定したキーワードのいずれかを含むページを検索", "JavaScript OR TypeScript", Active),
    op("AND", "すべてを含む", "指定したキーワードをすべて含むページを検索", "React AND Redux", Active),
    op("*", "ワイルドカード", "不明な単語やフレーズのプレースホルダーとして使用", "* プログラミング 入門", Active),
    op("()", "グループ化", "複数の検索条件をまとめて優先順位を制御", "(JavaScript OR TypeScript) AND React", Active),
    op("..", "数値範囲", "2つの数値の間の範囲を検索", "価格 1000..5000", Active),
];

const SITE_FILE_OPERATORS: &[OperatorDescriptor] = &[
    op("site:", "サイト内検索", "指定したウェブサイト内のみを検索", "site:github.com React", Active),
    op("filetype:", "ファイル形式", "指定したファイル形式の結果のみを検索", "filetype:pdf 年次報告書", Active),
    op("cache:", "キャッシュ表示", "Googleが最後にインデックスした時点のページを表示", "cache:example.com", Active),
    op("related:", "関連サイト", "指定したURLと関連性があるサイトを検索", "related:github.com", Limited),
];

const TARGET_OPERATORS: &[OperatorDescriptor] = &[
    op("intitle:", "タイトル内検索", "ページのタイトルに指定したキーワードを含むページを検索", "intitle:React チュートリアル", Active),
    op("allintitle:", "タイトル内検索（全て）", "ページのタイトルに指定したキーワードの全てを含むページを検索", "allintitle:React Redux チュートリアル", Active),
    op("inurl:", "URL内検索", "ページのURLに指定したキーワードを含むページを検索", "inurl:blog React", Active),
    op("allinurl:", "URL内検索（全て）", "ページのURLに指定したキーワードの全てを含むページを検索", "allinurl:blog react tutorial", Active),
    op("intext:", "テキスト内検索", "ページのコンテンツに指定した語句を含むページを検索", "intext:\"API設計\"", Active),
    op("allintext:", "テキスト内検索（全て）", "指定した語句がすべて含まれるページを検索", "allintext:React hooks useState", Active),
];

const TEMPLATE_GROUPS: &[TemplateGroup] = &[
    TemplateGroup {
        category: "マーケティング・競合調査",
        icon: TemplateIcon::Target,
        templates: &[
            template("競合サイト分析", "site:competitor.com (価格 OR 料金 OR プラン)", "競合他社の価格情報を調査"),
            template("業界レポート検索", "filetype:pdf \"市場調査\" OR \"業界レポート\" 2024", "最新の業界レポートを検索"),
            template("プレスリリース調査", "intitle:\"プレスリリース\" (新製品 OR 新サービス) -求人", "競合の新製品・サービス情報を収集"),
        ],
    },
    TemplateGroup {
        category: "技術調査・開発",
        icon: TemplateIcon::FileText,
        templates: &[
            template("API仕様書検索", "filetype:pdf OR filetype:doc \"API仕様\" OR \"API documentation\"", "API関連の技術文書を検索"),
            template("エラー解決方法", "site:stackoverflow.com OR site:github.com \"エラーメッセージ\"", "技術的な問題の解決方法を検索"),
            template("ライブラリ比較", "\"ライブラリ名1\" vs \"ライブラリ名2\" (比較 OR 違い OR メリット)", "技術選定のための比較情報を検索"),
        ],
    },
    TemplateGroup {
        category: "法務・コンプライアンス",
        icon: TemplateIcon::Globe,
        templates: &[
            template("法令・規制検索", "site:e-gov.go.jp OR site:cao.go.jp filetype:pdf \"法律名\"", "政府サイトから法令情報を検索"),
            template("判例検索", "\"判例\" OR \"裁判例\" \"キーワード\" filetype:pdf", "関連する判例を検索"),
            template("ガイドライン検索", "\"ガイドライン\" OR \"指針\" \"業界名\" filetype:pdf 2023..2024", "最新のガイドラインを検索"),
        ],
    },
];

pub fn list_operators(category: OperatorCategory) -> &'static [OperatorDescriptor] {
    match category {
        OperatorCategory::Basic => BASIC_OPERATORS,
        OperatorCategory::SiteFile => SITE_FILE_OPERATORS,
        OperatorCategory::Target => TARGET_OPERATORS,
    }
}

pub fn list_template_groups() -> &'static [TemplateGroup] {
    TEMPLATE_GROUPS
}

#[test]
fn catalog_shape() {
    let counts = OperatorCategory::ALL.map(|c| list_operators(c).len());
    assert_eq!(counts, [7, 4, 6]);

    let groups = list_template_groups();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.templates.len() == 3));

    let limited = list_operators(OperatorCategory::SiteFile).iter().filter(|o| o.status == Limited).map(|o| o.command).collect::<Vec<_>>();
    assert_eq!(limited, ["related:"]);
}
