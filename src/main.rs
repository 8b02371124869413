//! Cue - 选中文本快捷指令目录
//!
//! 入口：初始化日志、加载配置、构建目录服务。无参数时打印生效目录；传入
//! 指令码时从标准输入读取选中文本，打印填充后的最终指令（宿主派发路径的
//! 命令行替身）。

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use cue::catalog::InstructionItem;
use cue::config::load_config;
use cue::feature::MemoryFeatureRegistry;
use cue::invoke::fill_template;
use cue::service::CatalogService;
use cue::store::JsonFileStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // 日志：默认 info，可通过 RUST_LOG 覆盖
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with(fmt::layer())
        .init();

    let config = load_config(None).context("Failed to load config")?;

    let store = Arc::new(JsonFileStore::new(&config.store.path));
    let features = Arc::new(MemoryFeatureRegistry::new());
    let service = CatalogService::new(store, features).context("Failed to build catalog")?;

    match std::env::args().nth(1) {
        // 派发：按码解析指令，选中文本来自标准输入
        Some(code) => {
            let item = service
                .find_by_code(&code)
                .with_context(|| format!("Unknown instruction code: {code}"))?;
            let prompt = item
                .prompt
                .as_deref()
                .context("Instruction is a group node, pick one of its children")?;

            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read selected text from stdin")?;

            println!(
                "{}",
                fill_template(prompt, text.trim(), Some(&config.invoke.language), None)
            );
        }
        // 列出生效目录
        None => {
            for group in service.groups() {
                for category in &group.categories {
                    println!("{}", category.name);
                    for item in &category.items {
                        print_item(item, 1);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_item(item: &InstructionItem, depth: usize) {
    println!("{}{} ({})", "  ".repeat(depth), item.name, item.code);
    for child in &item.children {
        print_item(child, depth + 1);
    }
}
