fn main() -> Result<(), Box<dyn std::error::Error>> {
    pageplayer::runtime::run()
}
