use graphene_tb::HamiltonianBuilder;
use graphene_tb::hamiltonian::coordination;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pass parameters as JSON, either from the command line or using defaults
    let parameters = std::env::args().nth(1).unwrap_or_else(|| r#"{
        "nx": 6,
        "ny": 6,
        "hopping": 2.7,
        "neighbors": 1,
        "vacancies": [0, 15, 42]
    }"#.to_owned());

    let builder = HamiltonianBuilder::from_json(&parameters)?;
    let pristine = builder.pristine()?;
    let hamiltonian = builder.build()?;

    println!("hamiltonian shape: {:?}", hamiltonian.shape());

    let removed = pristine.iter().filter(|&&v| v != 0.0).count()
        - hamiltonian.iter().filter(|&&v| v != 0.0).count();
    println!("vacancies removed {} non-zero entries", removed);

    let dangling = coordination(&hamiltonian).into_iter()
        .enumerate()
        .filter(|&(site, count)| count < 3 && !builder.parameters().vacancies.contains(&site))
        .count();
    println!("{} sites lost at least one neighbor", dangling);

    Ok(())
}
