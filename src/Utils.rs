/// Reading and writing reference libraries as JSON files
///
///  # Examples
/// ```no_run
/// use SaponKin::Utils::load_from_file::LoadData;
/// let loader = LoadData::new("my_reference_data.json".to_string());
/// let library = loader.load_library().unwrap();
/// println!("{:?}", library.parameters());
/// ```
pub mod load_from_file;
