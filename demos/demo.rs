use std::collections::{HashMap, HashSet};

use brdoc::{Cnpj, Cpf, cnpj, cpf};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=brdoc=debug shows generator re-rolls
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("CPF");

    for input in ["111.444.777-35", "111.444.777-36", "111.111.111-11"] {
        let doc = Cpf::new(input);
        match doc.verify() {
            Ok(()) => println!("  {doc} -> valid"),
            Err(e) => println!("  {doc} -> {e}"),
        }
    }

    let plain = Cpf::new("11144477735");
    match plain.formatted() {
        Ok(f) => println!("  {} formats as {f}", plain.digits()),
        Err(e) => println!("  {e}"),
    }

    println!("  generated:");
    for _ in 0..3 {
        let doc = cpf::generate();
        println!("    {doc} (valid: {})", doc.is_valid());
    }

    let unique: HashSet<Cpf> = ["111.444.777-35", "11144477735", "529.982.247-25"]
        .into_iter()
        .map(Cpf::from)
        .collect();
    println!("  unique in set: {}", unique.len());

    println!("\nCNPJ");

    for input in ["11.222.333/0001-81", "11.222.333/0001-82"] {
        println!("  {input} -> valid: {}", cnpj::is_valid(input));
    }

    match cnpj::format("11222333000181") {
        Ok(f) => println!("  11222333000181 formats as {f}"),
        Err(e) => println!("  {e}"),
    }

    println!("  generated:");
    for _ in 0..3 {
        println!("    {}", cnpj::generate_formatted());
    }

    let companies: HashMap<Cnpj, &str> = [
        (Cnpj::new("11.222.333/0001-81"), "Acme Corporation"),
        (Cnpj::new("34.028.316/0001-03"), "Tech Solutions Ltd"),
    ]
    .into_iter()
    .collect();
    let lookup = Cnpj::new("11222333000181");
    println!("  {lookup} belongs to {:?}", companies.get(&lookup));

    if let Err(e) = "12.345.678/0001-00".parse::<Cnpj>() {
        println!("  strict parse failed: {e}");
    }
}
