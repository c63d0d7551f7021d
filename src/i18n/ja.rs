use super::*;

pub(super) static JA: Translations = Translations {
    common: Common {
        live_demo: "サイトを見る",
        intern: "インターン",
        work_together: "一緒に働きましょう",
    },
    nav: Nav {
        projects: "プロジェクト",
        skills: "スキル",
        experience: "職歴",
        education: "学歴",
        contact: "連絡先",
    },
    hero: Hero {
        badge: "Web開発者",
        title: "プロフィール",
        lead: "モントリオールを拠点とするフロントエンド & UX/UI 開発者。フロントは Vue/React、バックは Laravel で、すっきりと速くアクセシブルなインターフェースを作っています。",
        pitch: "コンポーネント指向、レスポンシブファースト。パフォーマンスとアクセシビリティ（WCAG）を重視しています。",
    },
    cta: Cta {
        view_projects: "プロジェクトを見る",
        contact: "お問い合わせ",
        resume: "履歴書 / CV",
    },
    sections: Sections {
        projects: "主なプロジェクト",
        projects_sub: "成果を重視した厳選プロジェクト。",
        skills: "スキル",
        skills_sub: "主要技術と日常的に使うツール。",
        experience: "職歴",
        experience_sub: "直近のアジャイル開発経験。",
        education: "学歴",
        education_sub: "カレッジでのWeb開発プログラム。",
        contact: "連絡先",
        contact_sub: "プロジェクトやフロントエンド実装のご相談をお待ちしています。",
        resume: "履歴書 / CV",
    },
    features: Features {
        booking: "予約システム（パッケージ、イベント前キャンセル）",
        roles: "ロール管理（管理者 / 顧客）",
        dashboard: "管理ダッシュボード",
        analytics: "Google Analytics 連携",
        map: "インタラクティブマップ",
        responsive: "レスポンシブデザイン",
        form: "お問い合わせフォーム",
        menu: "メニュー掲載",
    },
    projects: ProjectTexts {
        festival: ProjectText {
            title: "5:7 映画祭 — フルスタックプラットフォーム",
            role: "フルスタック",
            desc: "ロールと分析機能を備えた予約プラットフォーム。丁寧に仕上げたレスポンシブUI。",
        },
        g6: ProjectText {
            title: "Resto Pub G6 — レスポンシブなショーケースサイト",
            role: "フロントエンド / 実装",
            desc: "インタラクティブマップ、フォーム、メニューを備えたモダンなショーケースサイト。",
        },
    },
    skills: SkillLabels {
        front: "フロントエンド",
        back: "バックエンド",
        tools: "ツール & 手法",
        ci: "CI（基礎）",
    },
    exp: ExperienceText {
        period: "2024年10月 – 2024年12月",
        item1: "再利用可能なコンポーネントを用いたレスポンシブなデザインの実装（Laravel + Bootstrap）。",
        item2: "アジャイル（Jira）での開発：スプリント、レビュー、タスク管理、チーム連携。",
        item3: "モバイルUXの改善（可読性、パフォーマンス、タッチ操作）。",
    },
    edu: EducationText {
        program: "AEC — Webサイト設計・プログラミング",
        details: "HTML/CSS/JS、PHP/Laravel、UX/UI、実装、アジャイル手法を網羅したカリキュラム。",
    },
    resume: ResumeText {
        note: "「履歴書 / CV」をクリックするとPDF版をダウンロードできます。",
    },
    footer: FooterText {
        made: "Rust、Leptos、Tailwind で構築。",
    },
    chrome: Chrome {
        site_title: "Wanil Parfait — フロントエンド & UX/UI 開発者",
        toggle_theme: "テーマを切り替える",
        language_picker: "言語",
        crash_title: "問題が発生しました",
        crash_message: "このページを正しく表示できませんでした。",
        reload: "ページを再読み込み",
    },
};
