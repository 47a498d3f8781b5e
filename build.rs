use cbindgen::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // 获取目标目录（根据构建模式，可能是 target/debug 或 target/release）
    let out_dir = if cfg!(debug_assertions) {
        PathBuf::from(env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".into()))
            .join("debug")
    } else {
        PathBuf::from(env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".into()))
            .join("release")
    };

    // 获取当前 crate 的根目录
    let crate_dir =
        env::var("CARGO_MANIFEST_DIR").expect("Could not find Cargo manifest directory");

    // 加载配置文件，加载失败时退回默认配置
    let config = Config::from_file("cbindgen.toml").unwrap_or_default();

    // 尝试生成绑定并写入到输出目录下的头文件中
    // 头文件只是给 C 调用方的附属产物，生成失败不应使整个构建失败
    match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => {
            // 确保输出目录存在
            fs::create_dir_all(&out_dir).expect("Unable to create output directory");
            bindings.write_to_file(out_dir.join("chain_list.h"));
            println!("Successfully generated chain_list.h in {}", out_dir.display());
        }
        Err(e) => {
            eprintln!("Failed to generate bindings: {:?}", e);
        }
    }
}
