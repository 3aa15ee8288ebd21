//! # Operator REPL
//!
//! Line-oriented command loop for the register operator.
//!
//! ## Commands
//! ```text
//! scan <code>          look up a product by its scanned code
//! add                  add the resolved product to the purchase list
//! qty <id> <delta>     adjust a line quantity (negative removes at zero)
//! rm <id>              remove a line
//! list                 show the purchase list and live totals
//! buy                  submit the purchase
//! ok                   dismiss the settled-total popup
//! id <store> <pos> <emp>   set the terminal identity
//! help                 show this list
//! quit                 exit
//! ```
//!
//! A bare scanned code (a line that is not a known command) is treated as
//! `scan <line>` so a hardware barcode scanner typing into stdin works
//! without a prefix.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use regi_backend::CheckoutApi;
use regi_core::{CheckoutSession, TerminalIdentity};

use crate::commands;
use crate::error::TerminalError;
use crate::render;

// =============================================================================
// Command Grammar
// =============================================================================

/// One parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan(String),
    Add,
    ChangeQty { product_id: i64, delta: i64 },
    Remove { product_id: i64 },
    List,
    Buy,
    Dismiss,
    SetIdentity(TerminalIdentity),
    Help,
    Quit,
}

/// Parses one input line. `Ok(None)` means a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();

    let command = match head {
        "scan" => {
            let code = rest.join(" ");
            if code.is_empty() {
                return Err("使い方: scan <code>".to_string());
            }
            Command::Scan(code)
        }
        "add" => Command::Add,
        "qty" => match rest.as_slice() {
            [id, delta] => Command::ChangeQty {
                product_id: parse_i64(id, "id")?,
                delta: parse_i64(delta, "delta")?,
            },
            _ => return Err("使い方: qty <id> <delta>".to_string()),
        },
        "rm" => match rest.as_slice() {
            [id] => Command::Remove {
                product_id: parse_i64(id, "id")?,
            },
            _ => return Err("使い方: rm <id>".to_string()),
        },
        "list" => Command::List,
        "buy" => Command::Buy,
        "ok" => Command::Dismiss,
        "id" => match rest.as_slice() {
            [store, pos, emp] => Command::SetIdentity(TerminalIdentity {
                store_code: store.to_string(),
                pos_id: pos.to_string(),
                employee_code: emp.to_string(),
            }),
            _ => return Err("使い方: id <store> <pos> <emp>".to_string()),
        },
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        // Anything else is a raw barcode from a hardware scanner
        code if rest.is_empty() => Command::Scan(code.to_string()),
        _ => return Err(format!("不明なコマンド: {head} (help で一覧)")),
    };

    Ok(Some(command))
}

fn parse_i64(raw: &str, field: &str) -> Result<i64, String> {
    raw.parse()
        .map_err(|_| format!("{field} は整数で指定してください: {raw}"))
}

const HELP: &str = "\
scan <code>            商品コードを照会
add                    照会した商品を購入リストへ追加
qty <id> <delta>       数量を増減 (0 以下で行削除)
rm <id>                行を削除
list                   購入リストと合計を表示
buy                    購入を確定
ok                     購入完了表示を閉じる
id <store> <pos> <emp> 端末識別情報を変更
help                   このヘルプ
quit                   終了";

// =============================================================================
// Input Loop
// =============================================================================

/// Runs the REPL until `quit` or end of input.
pub async fn run_loop(
    mut session: CheckoutSession,
    api: Arc<dyn CheckoutApi>,
) -> Result<(), TerminalError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render::identity_line(&session));
    println!("{}", render::screen(&session));

    while let Some(line) = lines.next_line().await? {
        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };

        let notice = match command {
            Command::Scan(code) => commands::scan(&mut session, api.as_ref(), &code).await,
            Command::Add => commands::add(&mut session),
            Command::ChangeQty { product_id, delta } => {
                commands::change_qty(&mut session, product_id, delta)
            }
            Command::Remove { product_id } => {
                commands::remove(&mut session, product_id);
                None
            }
            Command::List => None,
            Command::Buy => commands::purchase(&mut session, api.as_ref()).await,
            Command::Dismiss => {
                commands::dismiss(&mut session);
                None
            }
            Command::SetIdentity(identity) => {
                let notice = commands::set_identity(&mut session, identity);
                if notice.is_none() {
                    println!("{}", render::identity_line(&session));
                }
                notice
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        if let Some(notice) = notice {
            println!("{notice}");
        }
        println!("{}", render::screen(&session));
    }

    info!("terminal session ended");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
