use crate::model::{Difficulty, Recipe, Tip};

const IMAGE_BASE: &str =
    "https://cdn.poehali.dev/projects/adaaa3bd-20ee-426f-a572-c7374b6d9e74/files";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Паста Карбонара".to_string(),
            image: format!("{IMAGE_BASE}/fd638a00-e8e9-48ef-9db3-0d8e619990e1.jpg"),
            time: 30,
            difficulty: Difficulty::Medium,
            category: "Основные блюда".to_string(),
            ingredients: strings(&[
                "Спагетти 400г",
                "Бекон 200г",
                "Яйца 4шт",
                "Пармезан 100г",
                "Чеснок 2 зубчика",
                "Оливковое масло",
                "Соль, перец",
            ]),
            steps: strings(&[
                "Отварите спагетти в подсоленной воде до состояния аль денте",
                "Обжарьте нарезанный бекон с чесноком до золотистого цвета",
                "Взбейте яйца с тертым пармезаном",
                "Смешайте горячую пасту с беконом и яичной смесью",
                "Подавайте сразу, посыпав пармезаном",
            ]),
        },
        Recipe {
            id: 2,
            title: "Шоколадный торт".to_string(),
            image: format!("{IMAGE_BASE}/c83a8873-5e04-4d04-8a45-5c44c47ad649.jpg"),
            time: 90,
            difficulty: Difficulty::Hard,
            category: "Десерты".to_string(),
            ingredients: strings(&[
                "Мука 200г",
                "Какао 50г",
                "Сахар 180г",
                "Яйца 3шт",
                "Масло сливочное 150г",
                "Разрыхлитель 1ч.л.",
                "Ягоды для украшения",
            ]),
            steps: strings(&[
                "Разогрейте духовку до 180°C",
                "Смешайте сухие ингредиенты",
                "Взбейте яйца с сахаром до пышности",
                "Соедините все компоненты и вымешайте тесто",
                "Выпекайте 40-45 минут",
                "Украсьте ягодами и шоколадом",
            ]),
        },
        Recipe {
            id: 3,
            title: "Тост с авокадо".to_string(),
            image: format!("{IMAGE_BASE}/2c15f40d-e98b-48ff-87af-9bf28fb6d480.jpg"),
            time: 15,
            difficulty: Difficulty::Easy,
            category: "Завтраки".to_string(),
            ingredients: strings(&[
                "Хлеб цельнозерновой 2 ломтика",
                "Авокадо 1шт",
                "Яйцо пашот 1шт",
                "Лимонный сок",
                "Соль, перец",
                "Кунжут",
            ]),
            steps: strings(&[
                "Подсушите хлеб в тостере",
                "Разомните авокадо с лимонным соком",
                "Сварите яйцо пашот",
                "Намажьте авокадо на тост",
                "Положите яйцо сверху",
                "Посыпьте кунжутом и специями",
            ]),
        },
    ]
}

pub(super) fn tips() -> Vec<Tip> {
    vec![
        Tip {
            id: 1,
            title: "Секрет идеальной пасты".to_string(),
            text: "Добавьте немного воды от варки пасты в соус — крахмал сделает его \
                   кремообразным и поможет соусу лучше держаться на макаронах."
                .to_string(),
        },
        Tip {
            id: 2,
            title: "Сочное мясо".to_string(),
            text: "Дайте мясу отдохнуть 5-10 минут после приготовления — соки \
                   распределятся равномерно, и мясо станет сочнее."
                .to_string(),
        },
        Tip {
            id: 3,
            title: "Ароматная выпечка".to_string(),
            text: "Используйте комнатной температуры ингредиенты для теста — они лучше \
                   смешиваются и дают более воздушную текстуру."
                .to_string(),
        },
    ]
}
