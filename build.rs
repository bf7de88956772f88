use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-changed=routes");
    println!("cargo:rerun-if-changed=assets");

    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    // Ship the config, routes and icons next to the binary so a packaged
    // build runs without the source tree.
    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
    copy_dir_files("routes", &target_dir.join("routes"));
    copy_dir_files("assets", &target_dir.join("assets"));
}

fn copy_dir_files(src: &str, dest: &Path) {
    fs::create_dir_all(dest).unwrap();
    for entry in fs::read_dir(src).unwrap() {
        let entry = entry.unwrap();
        if entry.file_type().unwrap().is_file() {
            fs::copy(entry.path(), dest.join(entry.file_name())).unwrap();
        }
    }
}
