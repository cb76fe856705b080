use footfall_core::Shop;

pub fn directory() -> Vec<Shop> {
    [
        ("shop-11", "Footfall Ikebukuro", "東口", "東京都"),
        ("shop-12", "Footfall Shibuya", "センター街", "東京都"),
        ("shop-13", "Footfall Shinjuku", "歌舞伎町", "東京都"),
        ("shop-21", "Footfall Umeda", "茶屋町", "大阪府"),
        ("shop-22", "Footfall Namba", "千日前", "大阪府"),
        ("shop-31", "Footfall Sakae", "錦三丁目", "愛知県"),
    ]
    .into_iter()
    .map(|(id, name, location, prefecture)| Shop {
        id: id.into(),
        name: name.to_string(),
        location: location.to_string(),
        prefecture: prefecture.to_string(),
    })
    .collect()
}
