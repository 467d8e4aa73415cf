use ben::ListEncoder;

fn main() {
    let mut v = vec![];
    let mut list = ListEncoder::new(&mut v);
    list.push(100);
    list.push("hello");

    let mut dict = list.push_dict();
    dict.insert("x", "y");
    dict.insert("a", &b"\xff\xfe"[..]);
    dict.finish();

    list.push(1);
    list.finish();

    let value = ben::decode(&v).unwrap();
    println!("{:#?}", value);
    assert_eq!(v, ben::encode(&value));
}
