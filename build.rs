use std::io::Write;
use std::{env, fs, io, path::Path};

fn ones_table<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fn gen_ones_table() -> Vec<u8> {
        let mut table = vec![0u8; 256];
        for i in 1..256 {
            // a byte has one more bit than the byte shifted right by one, if its lowest bit is set
            table[i] = table[i >> 1] + (i & 1) as u8;
        }
        table
    }
    let dir = env::var("OUT_DIR").unwrap();
    let mut file = fs::File::create(Path::new(&dir).join(path))?;
    writeln!(file, "{:?}", gen_ones_table())
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    ones_table("table.rs")?;
    Ok(())
}
