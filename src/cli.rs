use clap::{Parser, Subcommand};
use smart_size_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart-size")]
#[command(about = "Find your perfect size with one photo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全身写真を送信してサイズ推薦を受け取る
    Analyze {
        /// 全身写真のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 身長(cm)
        #[arg(long = "height")]
        height: Option<String>,

        /// カテゴリ (tshirt/shirt/hoodie/jacket/pants/jeans/dress/skirt)
        #[arg(short, long)]
        category: Option<Category>,

        /// ブランド（デフォルト: generic）
        #[arg(short, long)]
        brand: Option<String>,

        /// 派生データの保存に同意する
        #[arg(long)]
        consent: bool,

        /// 未指定の項目を対話で入力
        #[arg(short, long)]
        interactive: bool,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果をJSONで表示
        #[arg(long)]
        json: bool,
    },

    /// カテゴリ一覧を表示
    Categories,

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを保存
        #[arg(long)]
        set_backend_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "smart-size",
            "analyze",
            "me.jpg",
            "--height",
            "172",
            "--category",
            "jeans",
            "--consent",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                image,
                height,
                category,
                brand,
                consent,
                ..
            } => {
                assert_eq!(image, PathBuf::from("me.jpg"));
                assert_eq!(height.as_deref(), Some("172"));
                assert_eq!(category, Some(Category::Jeans));
                assert_eq!(brand, None);
                assert!(consent);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        let result = Cli::try_parse_from(["smart-size", "analyze", "me.jpg", "-c", "socks"]);
        assert!(result.is_err());
    }
}
