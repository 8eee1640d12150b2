use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use tm_codec::{read_vector, MatrixFile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Read a tiled matrix file and a vector file, multiply, and print the result", long_about = None)]
struct MainArguments {
    /// Path to the tiled matrix file.
    #[arg(default_value = "mat-d20-b5-p4.bin")]
    matrix_path: PathBuf,
    /// Path to the vector file.
    #[arg(default_value = "x-d20.txt.bin")]
    vector_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let arguments = MainArguments::parse();

    info!("reading matrix from {}", arguments.matrix_path.display());
    let matrix_file = MatrixFile::open(&arguments.matrix_path)?;
    println!(
        "Matrix dimension is {} x {}",
        matrix_file.dim(),
        matrix_file.dim()
    );
    let matrix = matrix_file.to_matrix();
    print!("{}", matrix);
    println!();

    info!("reading vector from {}", arguments.vector_path.display());
    let vector = read_vector(&arguments.vector_path)?;
    println!("Vector length is {}", vector.len());
    for (i, x) in vector.iter().enumerate() {
        println!("x[{}] = {:.2}", i, x);
    }
    println!();

    let result = matrix.matvec(&vector)?;
    for (i, y) in result.iter().enumerate() {
        println!("y[{}] = {:.2}", i, y);
    }

    Ok(())
}
