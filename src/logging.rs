//! ログ設定
//!
//! 進捗表示は標準出力（println!）、診断ログはtracingで標準エラーに出す。

use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tracingの初期化
///
/// RUST_LOGがあればそれを使い、なければ `--verbose` でdebug、通常はwarn。
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重初期化された場合は無視
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
