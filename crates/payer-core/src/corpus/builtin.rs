//! Built-in corpora for Brazilian Pix receipts.

/// Phrases that announce the payer block.
pub(super) const PAYER_ANCHORS: &[&str] = &[
    "pago por",
    "quem pagou",
    "origem",
    "nome",
    "pagador",
    "dados do pagador",
    "nome do pagador",
    "dados de origem",
    "conta de origem",
    "remetente",
    "enviado por",
    "de quem",
];

/// Phrases that disqualify a line as a payer name.
pub(super) const IGNORE_PHRASES: &[&str] = &[
    "comprovante",
    "transferência",
    "transferencia",
    "pagamento",
    "pix",
    "cpf",
    "cnpj",
    "valor",
    "data",
    "horário",
    "horario",
    "agência",
    "agencia",
    "conta",
    "instituição",
    "instituicao",
    "banco inter",
    "banco do brasil",
    "banco original",
    "banco",
    "nubank",
    "nu pagamentos",
    "itaú",
    "itau",
    "bradesco",
    "santander",
    "caixa econ",
    "mercado pago",
    "picpay",
    "pagseguro",
    "pagbank",
    "sicoob",
    "sicredi",
    "c6 bank",
    "stone",
    "id da transação",
    "id da transacao",
    "identificador",
    "autenticação",
    "autenticacao",
    "chave pix",
    "destino",
    "destinatário",
    "destinatario",
    "recebedor",
    "favorecido",
    "quem recebeu",
    "pagador",
    "pago por",
    "quem pagou",
    "origem",
    "dados",
    "realizad",
    "efetuad",
    "enviad",
    "recebid",
    "concluíd",
    "concluid",
    "ouvidoria",
    "atendimento",
    "central de",
    "dúvida",
    "duvida",
    "descrição",
    "descricao",
    "mensagem",
    "documento",
    "protocolo",
    "código",
    "codigo",
    "saldo",
    "extrato",
    "recibo",
    "estamos aqui",
    "ajudar",
    "tipo de",
    "corrente",
    "poupança",
    "poupanca",
    "ltda",
];

/// Common Brazilian given and family name fragments.
pub(super) const NAME_TOKENS: &[&str] = &[
    // given names
    "ana", "maria", "joao", "joão", "jose", "josé", "antonio", "antônio", "francisco",
    "carlos", "paulo", "pedro", "lucas", "luiz", "luis", "marcos", "luciana", "gabriel",
    "rafael", "daniel", "marcelo", "bruno", "eduardo", "felipe", "raimundo", "rodrigo",
    "manoel", "mateus", "matheus", "andre", "andré", "fernando", "fabio", "fábio",
    "leonardo", "gustavo", "guilherme", "leandro", "tiago", "thiago", "anderson",
    "ricardo", "marcio", "márcio", "jorge", "alexandre", "roberto", "sebastiao",
    "sebastião", "edson", "diego", "vitor", "victor", "sergio", "sérgio", "claudio",
    "cláudio", "renato", "vinicius", "vinícius", "adriano", "joaquim", "geraldo",
    "julio", "júlio", "samuel", "igor", "henrique", "arthur", "artur", "heitor",
    "bernardo", "davi", "david", "miguel", "enzo", "nicolas", "murilo", "caio",
    "otavio", "otávio", "wagner", "wellington", "washington", "william", "wesley",
    "alan", "allan", "alex", "caue", "cauã", "breno", "renan", "emerson", "everton",
    "cristiano", "robson", "rogerio", "rogério", "mauricio", "maurício", "flavio",
    "flávio", "jefferson", "juliano", "luan", "kaique", "ruan", "yuri", "hugo",
    "francisca", "antonia", "antônia", "adriana", "juliana", "marcia", "márcia",
    "fernanda", "patricia", "patrícia", "aline", "sandra", "camila", "amanda",
    "bruna", "jessica", "jéssica", "leticia", "letícia", "julia", "júlia", "luana",
    "vanessa", "mariana", "gabriela", "vera", "vitoria", "vitória", "larissa",
    "claudia", "cláudia", "beatriz", "rita", "luciene", "sonia", "sônia", "simone",
    "rosa", "raquel", "helena", "alice", "laura", "valentina", "sophia", "sofia",
    "isabela", "isabella", "manuela", "lara", "lorena", "livia", "lívia", "giovanna",
    "heloisa", "heloísa", "cecilia", "cecília", "eduarda", "rafaela", "daniela",
    "carolina", "tatiane", "tatiana", "priscila", "renata", "cristina", "cristiane",
    "elaine", "eliane", "regina", "rosangela", "rosângela", "silvia", "sílvia",
    "carla", "paula", "monica", "mônica", "debora", "débora", "natalia", "natália",
    "thais", "thaís", "bianca", "viviane", "kelly", "joana", "tereza", "teresa",
    "aparecida", "conceicao", "conceição", "fatima", "fátima", "lucia", "lúcia",
    "marlene", "ivone", "iracema", "josefa", "luzia", "terezinha", "jaqueline",
    "michele", "andreia", "andréia", "denise", "edna", "elisangela", "elisângela",
    "gisele", "karina", "katia", "kátia", "lais", "laís", "mirian", "miriam",
    "nathalia", "yasmin", "emanuelly", "ester", "esther", "sara", "sarah",
    // family names
    "silva", "santos", "oliveira", "souza", "sousa", "rodrigues", "ferreira", "alves",
    "pereira", "lima", "gomes", "costa", "ribeiro", "martins", "carvalho", "almeida",
    "lopes", "soares", "fernandes", "vieira", "barbosa", "rocha", "dias", "nascimento",
    "andrade", "moreira", "nunes", "marques", "machado", "mendes", "freitas", "cardoso",
    "ramos", "goncalves", "gonçalves", "santana", "teixeira", "araujo", "araújo",
    "batista", "melo", "mello", "moura", "cavalcanti", "cavalcante", "monteiro",
    "correia", "correa", "pinto", "campos", "castro", "miranda", "barros", "farias",
    "azevedo", "nogueira", "cunha", "reis", "sales", "salles", "xavier", "borges",
    "pires", "medeiros", "guimaraes", "guimarães", "coelho", "duarte", "fonseca",
    "macedo", "siqueira", "brito", "morais", "moraes", "leite", "bezerra", "rezende",
    "resende", "tavares", "matos", "mattos", "aguiar", "amaral", "bastos", "peixoto",
    "queiroz", "figueiredo", "vasconcelos", "neves", "prado", "santiago", "pacheco",
    "jesus", "cruz", "viana", "franco", "miguel", "paiva", "assis", "brandao",
    "brandão", "antunes", "camargo", "leal", "lacerda", "fontes", "galvao", "galvão",
    "diniz", "magalhaes", "magalhães", "porto", "sampaio", "toledo", "valle", "vale",
    "bento", "calixto", "chaves", "damasceno", "esteves", "falcao", "falcão",
    "godoy", "godoi", "holanda", "jardim", "maia", "mota", "motta", "neto", "filho",
    "junior", "júnior", "sobrinho", "pimentel", "quintana", "rangel", "sabino",
    "serra", "silveira", "simoes", "simões", "torres", "uchoa", "varela", "veloso",
    "zanetti", "benedito", "paixao", "paixão", "lemos", "portela", "louzada",
];
