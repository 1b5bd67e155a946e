use std::fs;

use mockito::Server;

use virb_rs::{firmware::Garmin, storage::MassStorage, Error};

#[test]
fn update_downloads_and_writes_blob() {
    let blob: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 251) as u8).collect();

    let mut server = Server::new();
    let mock = server
        .mock("GET", "/software/VIRB_420.gcd")
        .with_status(200)
        .with_body(&blob)
        .create();

    let mount = tempfile::tempdir().unwrap();
    fs::create_dir_all(mount.path().join("Garmin")).unwrap();

    let storage = MassStorage::new(mount.path());
    let garmin = Garmin::with_base_url(format!("{}/software", server.url())).unwrap();

    assert!(storage.update_firmware(&garmin, Some(4.2)).unwrap());
    mock.assert();

    let written = fs::read(mount.path().join("Garmin/gupdate.gcd")).unwrap();
    assert_eq!(written, blob);
}

#[test]
fn missing_firmware_is_an_error() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/software/VIRB_999.gcd")
        .with_status(404)
        .with_body("not found")
        .create();

    let garmin = Garmin::with_base_url(format!("{}/software", server.url())).unwrap();
    assert!(matches!(garmin.fetch("VIRB", 9.99), Err(Error::Http(_))));
    mock.assert();
}
