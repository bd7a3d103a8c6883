use addrbook::book::AddressBook;
use addrbook::fields::Phone;
use addrbook::model::Record;
use addrbook::store::fs::FileStore;
use addrbook::store::BookStore;

fn populated_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let mut record = Record::new(format!("Contact{i}")).unwrap();
        for j in 0..(i % 3) {
            record.add_phone(&format!("{:010}", i * 10 + j)).unwrap();
        }
        if i % 2 == 0 {
            record
                .add_birthday(&format!("{:02}.{:02}.19{:02}", (i % 28) + 1, (i % 12) + 1, i % 100))
                .unwrap();
        }
        book.add_record(record);
    }
    book
}

#[test]
fn save_then_load_is_lossless() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path().join("book.json"));

    let book = populated_book(25);
    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 25);
    for original in book.records() {
        let restored = loaded.find(original.name().as_str()).unwrap();
        let before: Vec<&str> = original.phones().iter().map(Phone::as_str).collect();
        let after: Vec<&str> = restored.phones().iter().map(Phone::as_str).collect();
        assert_eq!(before, after);
        assert_eq!(original.birthday(), restored.birthday());
    }
    assert_eq!(loaded, book);
}

#[test]
fn repeated_saves_produce_identical_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("book.json");
    let mut store = FileStore::new(&path);

    store.save(&populated_book(10)).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let reloaded = store.load().unwrap();
    store.save(&reloaded).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_target_loads_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(temp_dir.path().join("missing").join("book.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn duplicate_phones_survive_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path().join("book.json"));

    let mut book = AddressBook::new();
    let mut record = Record::new("Dup").unwrap();
    record.add_phone("1111111111").unwrap();
    record.add_phone("1111111111").unwrap();
    book.add_record(record);

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.find("Dup").unwrap().phones().len(), 2);
}
