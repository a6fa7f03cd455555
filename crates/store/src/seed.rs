//! Fixture data every table starts with at process start.

use indexmap::IndexMap;
use tristore_core::types::RecordId;

use crate::models::item::Item;
use crate::models::review::{Criteria, Review};
use crate::models::series::{Character, Series};
use crate::models::todo::Todo;

pub fn items() -> Vec<Item> {
    [
        (1, "会議室予約システム", "会議室A, B, C の予約状況", "system"),
        (2, "備品管理システム", "PC、モニター、ケーブルの在庫状況", "system"),
        (3, "社員名簿データ", "部署、内線、入社日情報", "data"),
    ]
    .into_iter()
    .map(|(id, name, description, kind)| Item {
        id,
        name: name.to_string(),
        description: description.to_string(),
        kind: Some(kind.to_string()),
    })
    .collect()
}

/// Scores in the fixed order story, setting, character, gameplay, original.
fn criteria(scores: [i64; 5]) -> Criteria {
    ["story", "setting", "character", "gameplay", "original"]
        .into_iter()
        .map(String::from)
        .zip(scores.map(Some))
        .collect::<IndexMap<_, _>>()
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            title: "UNDERTALE".to_string(),
            comment: "地底世界に落ちた人間の子どもが、モンスターたちと出会いながら地上への帰還を目指すドット絵のRPG。生かすも殺すも、あなたの選択次第。".to_string(),
            chart_image: "UNDERTALE.png".to_string(),
            criteria: criteria([5, 5, 5, 4, 5]),
        },
        Review {
            id: 2,
            title: "キミガシネ".to_string(),
            comment: "多数決で選ばれた者が死ぬ。集められた11人の参加者が生存をかけて舌戦を繰り広げるレトロホラーアドベンチャー。".to_string(),
            chart_image: "キミガシネ.png".to_string(),
            criteria: criteria([5, 4, 5, 5, 5]),
        },
        Review {
            id: 3,
            title: "Ruina 廃都の物語".to_string(),
            comment: "地図の空白を埋めながらダンジョンを探索する、ゲームブック的RPG。細やかな情景描写と、行動の自由度の高さが最大の特徴。".to_string(),
            chart_image: "Ruina.png".to_string(),
            criteria: criteria([4, 5, 3, 4, 5]),
        },
    ]
}

pub fn todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            text: "メールをチェックする".to_string(),
        },
        Todo {
            id: 2,
            text: "WebサイトCのコーディングを終わらせる".to_string(),
        },
    ]
}

fn characters(rows: &[(RecordId, &str, &str, &str)]) -> Vec<Character> {
    rows.iter()
        .map(|&(id, name, ability, image)| Character {
            id,
            name: name.to_string(),
            ability: ability.to_string(),
            image: image.to_string(),
        })
        .collect()
}

pub fn series() -> Vec<Series> {
    vec![
        Series {
            series_id: 1,
            title: "東方紅魔郷 〜 the Embodiment of Scarlet Devil.".to_string(),
            short: "TH06".to_string(),
            characters: characters(&[
                (101, "博麗 霊夢", "空を飛ぶ程度の能力", "reimu_06.png"),
                (102, "霧雨 魔理沙", "魔法を使う程度の能力", "marisa_06.png"),
                (103, "ルーミア", "闇を操る程度の能力", "rumia_06.png"),
                (104, "チルノ", "冷気を操る程度の能力", "cirno_06.png"),
                (105, "紅 美鈴", "気を使う程度の能力", "meiling_06.png"),
                (106, "パチュリー・ノーレッジ", "火水木金土の魔法を使う程度の能力", "patchouli_06.png"),
                (107, "十六夜 咲夜", "時間を操る程度の能力", "sakuya_06.png"),
                (108, "レミリア・スカーレット", "運命を操る程度の能力", "remilia_06.png"),
                (109, "フランドール・スカーレット", "ありとあらゆるものを破壊する程度の能力", "flandre_06.png"),
            ]),
        },
        Series {
            series_id: 2,
            title: "東方妖々夢 〜 Perfect Cherry Blossom.".to_string(),
            short: "TH07".to_string(),
            characters: characters(&[
                (201, "レティ・ホワイトロック", "寒気を操る程度の能力", "letty_07.png"),
                (202, "橙", "妖術を操る程度の能力", "chen_07.png"),
                (203, "アリス・マーガトロイド", "人形を操る程度の能力", "alice_07.png"),
                (204, "プリズムリバー三姉妹", "手足を使わずに楽器を演奏する程度の能力", "prismriver_07.png"),
                (205, "魂魄 妖夢", "剣術を扱う程度の能力", "youmu_07.png"),
                (206, "西行寺 幽々子", "死を操る程度の能力", "yuyuko_07.png"),
                (207, "八雲 藍", "式神を使う程度の能力", "ran_07.png"),
                (208, "八雲 紫", "境界を操る程度の能力", "yukari_07.png"),
            ]),
        },
    ]
}
