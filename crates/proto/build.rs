//! Build script for the `medtest-proto` crate.
//!
//! ## Purpose
//! Generates Rust protobuf types and gRPC stubs from `proto/medical_test.proto`.
//!
//! ## Intended use
//! Client stubs are used by the `medtest` CLI. Server traits are generated as well so that tests
//! can stand up an in-process service against the same schema.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let proto_include_root = manifest_dir.join("proto");
    let proto_file = proto_include_root.join("medical_test.proto");

    println!("cargo:rerun-if-changed={}", proto_file.display());

    // Ordered maps keep `results` rendering stable between runs.
    let mut config = prost_build::Config::new();
    config.btree_map(["."]);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos_with_config(
            config,
            std::slice::from_ref(&proto_file),
            &[proto_include_root.as_path()],
        )?;

    Ok(())
}
