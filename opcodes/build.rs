use std::{collections::BTreeSet, fs::File, io::Write};

use anyhow::Result;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde::{Deserialize, Serialize};

fn main() -> Result<()> {
    // Regenerate if either opcode table changes.
    println!("cargo:rerun-if-changed=major_opcodes.json");
    println!("cargo:rerun-if-changed=reg_opcodes.json");

    let major: Vec<OpcodeEntry> = serde_json::from_slice(include_bytes!("./major_opcodes.json"))?;
    assert_eq!(256, major.len(), "Must cover exactly 256 major opcodes");

    let reg: Vec<OpcodeEntry> = serde_json::from_slice(include_bytes!("./reg_opcodes.json"))?;
    assert_eq!(
        128,
        reg.len(),
        "Must cover exactly 128 REG-format effective opcode slots"
    );

    let major_file = build_table_file("MajorOp", "decode_major", "u8", &major)?;
    let mut f = File::create("./src/major_opcode.rs")?;
    write!(f, "{}", prettyplease::unparse(&major_file))?;

    let reg_file = build_table_file("RegOp", "decode_reg", "u16", &reg)?;
    let mut f = File::create("./src/reg_opcode.rs")?;
    write!(f, "{}", prettyplease::unparse(&reg_file))?;

    Ok(())
}

/// Build one generated module: an enum of the *distinct* instruction
/// identities in `entries`, a `decode_*` function mapping the raw opcode
/// value onto that enum (several raw values may map to the same variant,
/// e.g. every conditional-branch major opcode maps to `BranchConditional`),
/// and a `Display` impl yielding the canonical mnemonic.
fn build_table_file(
    enum_name: &str,
    decode_fn_name: &str,
    raw_ty: &str,
    entries: &[OpcodeEntry],
) -> Result<syn::File> {
    Ok(syn::File {
        shebang: None,
        attrs: vec![],
        items: vec![
            syn::parse2(build_enum(enum_name, entries))?,
            syn::parse2(build_decode_fn(enum_name, decode_fn_name, raw_ty, entries))?,
            syn::parse2(build_display(enum_name, entries))?,
        ],
    })
}

fn build_enum(enum_name: &str, entries: &[OpcodeEntry]) -> TokenStream {
    let enum_ident = format_ident!("{enum_name}");

    // Preserve first-seen order, but only emit each variant once.
    let mut seen = BTreeSet::new();
    let variants = entries.iter().filter_map(|op| {
        if seen.insert(op.id.clone()) {
            let id = format_ident!("{}", op.id);
            Some(quote! { #id })
        } else {
            None
        }
    });

    quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum #enum_ident {
            #(#variants),*
        }
    }
}

fn build_decode_fn(
    enum_name: &str,
    fn_name: &str,
    raw_ty: &str,
    entries: &[OpcodeEntry],
) -> TokenStream {
    let enum_ident = format_ident!("{enum_name}");
    let fn_ident = format_ident!("{fn_name}");
    let raw_ty_ident = format_ident!("{raw_ty}");

    let arms = entries.iter().map(|op| {
        let id = format_ident!("{}", op.id);
        // Suffix the literal to match the raw opcode width, otherwise the
        // generated match arms default to an untyped integer and disagree
        // with the function's parameter type.
        let opcode = match raw_ty {
            "u8" => proc_macro2::Literal::u8_suffixed(op.opcode as u8),
            "u16" => proc_macro2::Literal::u16_suffixed(op.opcode as u16),
            other => panic!("unsupported raw opcode width: {other}"),
        };

        quote! { #opcode => #enum_ident::#id }
    });

    quote! {
        pub fn #fn_ident(opcode: #raw_ty_ident) -> #enum_ident {
            match opcode {
                #(#arms),*,
                _ => #enum_ident::IllegalOpcode,
            }
        }
    }
}

fn build_display(enum_name: &str, entries: &[OpcodeEntry]) -> TokenStream {
    let enum_ident = format_ident!("{enum_name}");

    let mut seen = BTreeSet::new();
    let arms = entries.iter().filter_map(|op| {
        if seen.insert(op.id.clone()) {
            let id = format_ident!("{}", op.id);
            let mnemonic = &op.mnemonic;
            Some(quote! { #enum_ident::#id => #mnemonic })
        } else {
            None
        }
    });

    quote! {
        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", match self {
                    #(#arms),*
                })
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct OpcodeEntry {
    opcode: u32,
    id: String,
    mnemonic: String,
}
